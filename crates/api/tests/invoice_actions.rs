//! Action-level tests for the invoice mutations, exercising the full
//! validate → persist → outcome pipeline against a migrated Postgres.

use assert_matches::assert_matches;
use chrono::Utc;
use sqlx::PgPool;

use acme_api::actions::invoices::{create_invoice, delete_invoice, update_invoice};
use acme_core::invoice::{InvoiceForm, MutationOutcome, MSG_CUSTOMER_REQUIRED};
use acme_db::models::customer::NewCustomer;
use acme_db::models::invoice::NewInvoice;
use acme_db::repositories::{CustomerRepo, InvoiceRepo};

async fn seed_customer(pool: &PgPool) -> String {
    CustomerRepo::insert(
        pool,
        &NewCustomer {
            name: "Acme Corp".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_invoice(pool: &PgPool, customer_id: &str) -> String {
    InvoiceRepo::insert(
        pool,
        &NewInvoice {
            customer_id: customer_id.to_string(),
            amount: 1000,
            status: "pending".to_string(),
            date: Utc::now().date_naive(),
        },
    )
    .await
    .unwrap()
    .id
}

fn form(customer: &str, amount: &str, status: &str) -> InvoiceForm {
    InvoiceForm {
        customer_id: Some(customer.to_string()),
        amount: Some(amount.to_string()),
        status: Some(status.to_string()),
    }
}

async fn invoice_count(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invoices")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_missing_customer_reports_errors_and_writes_nothing(pool: PgPool) {
    let input = InvoiceForm {
        customer_id: None,
        amount: Some("50".to_string()),
        status: Some("paid".to_string()),
    };

    let outcome = create_invoice(&pool, &input).await;

    let state = assert_matches!(outcome, MutationOutcome::Errors(state) => state);
    let errors = state.errors.expect("validation failures carry field errors");
    assert_eq!(
        errors.customer_id,
        Some(vec![MSG_CUSTOMER_REQUIRED.to_string()])
    );
    assert_eq!(
        state.message.as_deref(),
        Some("Missing Fields. Failed to create invoice.")
    );

    // Validation failure must short-circuit before any database access.
    assert_eq!(invoice_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_valid_persists_cents_and_today_then_redirects(pool: PgPool) {
    let customer_id = seed_customer(&pool).await;

    let outcome = create_invoice(&pool, &form(&customer_id, "50", "paid")).await;
    assert_eq!(outcome, MutationOutcome::Redirect("/dashboard/invoices"));

    let rows = InvoiceRepo::list_with_customers(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, 5000);
    assert_eq!(rows[0].status, "paid");
    assert_eq!(rows[0].date, Utc::now().date_naive());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_boundary_amount_rounds_to_cents(pool: PgPool) {
    let customer_id = seed_customer(&pool).await;

    let outcome = create_invoice(&pool, &form(&customer_id, "19.999", "pending")).await;
    assert_matches!(outcome, MutationOutcome::Redirect(_));

    let rows = InvoiceRepo::list_with_customers(&pool).await.unwrap();
    assert_eq!(rows[0].amount, 2000);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_persistence_failure_reports_generic_message(pool: PgPool) {
    // Valid form, but the customer does not exist: the FK violation is a
    // database error, not a validation error.
    let outcome = create_invoice(&pool, &form("no-such-customer", "50", "paid")).await;

    let state = assert_matches!(outcome, MutationOutcome::Errors(state) => state);
    assert!(state.errors.is_none());
    assert_eq!(
        state.message.as_deref(),
        Some("Database Error: Failed to create invoice.")
    );
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_valid_changes_row_and_redirects(pool: PgPool) {
    let customer_id = seed_customer(&pool).await;
    let invoice_id = seed_invoice(&pool, &customer_id).await;

    let outcome = update_invoice(&pool, &invoice_id, &form(&customer_id, "75.50", "paid")).await;
    assert_eq!(outcome, MutationOutcome::Redirect("/dashboard/invoices"));

    let updated = InvoiceRepo::find_by_id(&pool, &invoice_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.amount, 7550);
    assert_eq!(updated.status, "paid");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_validation_failure_phrases_message_for_update(pool: PgPool) {
    let customer_id = seed_customer(&pool).await;
    let invoice_id = seed_invoice(&pool, &customer_id).await;

    let outcome = update_invoice(&pool, &invoice_id, &form(&customer_id, "0", "paid")).await;

    let state = assert_matches!(outcome, MutationOutcome::Errors(state) => state);
    assert_eq!(
        state.message.as_deref(),
        Some("Missing Fields. Failed to update invoice.")
    );

    // Row untouched.
    let row = InvoiceRepo::find_by_id(&pool, &invoice_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.amount, 1000);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_nonexistent_id_still_redirects(pool: PgPool) {
    let customer_id = seed_customer(&pool).await;

    // Zero rows affected is treated as success; no existence check is made.
    let outcome = update_invoice(&pool, "no-such-invoice", &form(&customer_id, "50", "paid")).await;
    assert_eq!(outcome, MutationOutcome::Redirect("/dashboard/invoices"));
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_row_and_reports_done(pool: PgPool) {
    let customer_id = seed_customer(&pool).await;
    let invoice_id = seed_invoice(&pool, &customer_id).await;

    let outcome = delete_invoice(&pool, &invoice_id).await;
    assert_eq!(outcome, MutationOutcome::Done);
    assert_eq!(invoice_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_twice_reports_done_both_times(pool: PgPool) {
    let customer_id = seed_customer(&pool).await;
    let invoice_id = seed_invoice(&pool, &customer_id).await;

    assert_eq!(delete_invoice(&pool, &invoice_id).await, MutationOutcome::Done);
    assert_eq!(delete_invoice(&pool, &invoice_id).await, MutationOutcome::Done);
}
