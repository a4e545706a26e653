//! Invoice mutation actions: create, update, delete.
//!
//! Ordering within each action is fixed: validate, then (branch) return the
//! field errors or execute the single parameterized statement. A validation
//! failure never touches the database. A persistence failure is classified
//! by [`persistence_failure`]: the structured cause is logged internally and
//! the caller receives only the generic per-operation message.

use chrono::Utc;
use sqlx::PgPool;

use acme_core::invoice::{
    self, ActionState, InvoiceForm, MutationOp, MutationOutcome, INVOICES_PATH,
};
use acme_db::models::invoice::{InvoiceChanges, NewInvoice};
use acme_db::repositories::InvoiceRepo;

/// Create an invoice from raw form input.
///
/// On success the invoice is stamped with today's date (UTC, day precision)
/// and the outcome asks for a redirect to the invoices list.
pub async fn create_invoice(pool: &PgPool, form: &InvoiceForm) -> MutationOutcome {
    let validated = match invoice::validate(form) {
        Ok(v) => v,
        Err(errors) => {
            return MutationOutcome::Errors(ActionState::validation(MutationOp::Create, errors))
        }
    };

    let input = NewInvoice {
        customer_id: validated.customer_id.clone(),
        amount: validated.amount_in_cents(),
        status: validated.status.as_str().to_string(),
        date: Utc::now().date_naive(),
    };

    match InvoiceRepo::insert(pool, &input).await {
        Ok(created) => {
            tracing::info!(id = %created.id, amount = created.amount, "Invoice created");
            MutationOutcome::Redirect(INVOICES_PATH)
        }
        Err(err) => persistence_failure(MutationOp::Create, err),
    }
}

/// Update the invoice with the given id from raw form input.
///
/// The id arrives out-of-band from the route and is trusted as
/// already-authorized. No existence check is performed: updating a
/// nonexistent id affects zero rows and still redirects. `date` is never
/// modified.
pub async fn update_invoice(pool: &PgPool, id: &str, form: &InvoiceForm) -> MutationOutcome {
    let validated = match invoice::validate(form) {
        Ok(v) => v,
        Err(errors) => {
            return MutationOutcome::Errors(ActionState::validation(MutationOp::Update, errors))
        }
    };

    let changes = InvoiceChanges {
        customer_id: validated.customer_id.clone(),
        amount: validated.amount_in_cents(),
        status: validated.status.as_str().to_string(),
    };

    match InvoiceRepo::update(pool, id, &changes).await {
        Ok(affected) => {
            tracing::info!(id, affected, "Invoice updated");
            MutationOutcome::Redirect(INVOICES_PATH)
        }
        Err(err) => persistence_failure(MutationOp::Update, err),
    }
}

/// Delete the invoice with the given id.
///
/// No validation: the id is pre-authorized by the caller. A zero-row delete
/// (id already gone) is success, same as a normal delete. No redirect; the
/// caller stays on the list it invoked this from.
pub async fn delete_invoice(pool: &PgPool, id: &str) -> MutationOutcome {
    match InvoiceRepo::delete(pool, id).await {
        Ok(affected) => {
            tracing::info!(id, affected, "Invoice deleted");
            MutationOutcome::Done
        }
        Err(err) => persistence_failure(MutationOp::Delete, err),
    }
}

/// Classify a persistence failure: log the cause with structure, hand the
/// caller the generic message only.
fn persistence_failure(op: MutationOp, err: sqlx::Error) -> MutationOutcome {
    tracing::error!(operation = op.verb(), error = %err, "Invoice mutation failed at the database");
    MutationOutcome::Errors(ActionState::database_error(op))
}
