//! Handlers for the invoice pages and mutations.
//!
//! Mutations accept classic `application/x-www-form-urlencoded` form posts.
//! Outcome mapping:
//! - `Redirect(path)` → invalidate the invoices view, then `303 See Other`
//! - `Done`           → invalidate the invoices view, then `204 No Content`
//! - `Errors(state)`  → `422` (validation) or `500` (persistence) with the
//!   `ActionState` JSON body for the caller to re-render from

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use acme_core::error::CoreError;
use acme_core::invoice::{ActionState, InvoiceForm, MutationOutcome, INVOICES_PATH};
use acme_db::repositories::{CustomerRepo, InvoiceRepo};

use crate::actions;
use crate::error::{AppError, AppResult};
use crate::page;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Outcome realization
// ---------------------------------------------------------------------------

/// Turn a mutation outcome into an HTTP response.
///
/// Cache invalidation is the explicit post-commit step here: it runs only
/// for success variants and always precedes the redirect.
fn realize(state: &AppState, outcome: MutationOutcome) -> Response {
    match outcome {
        MutationOutcome::Redirect(path) => {
            state.page_cache.invalidate(INVOICES_PATH);
            Redirect::to(path).into_response()
        }
        MutationOutcome::Done => {
            state.page_cache.invalidate(INVOICES_PATH);
            StatusCode::NO_CONTENT.into_response()
        }
        MutationOutcome::Errors(action_state) => error_response(action_state),
    }
}

/// Validation failures carry field errors and map to 422; persistence
/// failures carry only the generic message and map to 500.
fn error_response(action_state: ActionState) -> Response {
    let status = if action_state.errors.is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, axum::Json(action_state)).into_response()
}

// ---------------------------------------------------------------------------
// GET /dashboard/invoices
// ---------------------------------------------------------------------------

/// Server-rendered invoices list page, the redirect target of the
/// mutations. Renders with the current page-cache generation stamped in.
pub async fn invoices_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let invoices = InvoiceRepo::list_with_customers(&state.pool).await?;
    let generation = state.page_cache.generation(INVOICES_PATH);
    Ok(Html(page::invoices_page(&invoices, generation)))
}

// ---------------------------------------------------------------------------
// GET /dashboard/invoices/{id}/edit
// ---------------------------------------------------------------------------

/// Server-rendered edit form for one invoice.
pub async fn edit_invoice_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Invoice",
                id: id.clone(),
            })
        })?;
    let customers = CustomerRepo::list(&state.pool).await?;
    Ok(Html(page::edit_invoice_page(&invoice, &customers)))
}

// ---------------------------------------------------------------------------
// POST /dashboard/invoices
// ---------------------------------------------------------------------------

/// Create an invoice from a form post.
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    let outcome = actions::invoices::create_invoice(&state.pool, &form).await;
    realize(&state, outcome)
}

// ---------------------------------------------------------------------------
// POST /dashboard/invoices/{id}
// ---------------------------------------------------------------------------

/// Update an invoice from a form post. The id comes from the route, not the
/// form body.
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    let outcome = actions::invoices::update_invoice(&state.pool, &id, &form).await;
    realize(&state, outcome)
}

// ---------------------------------------------------------------------------
// POST /dashboard/invoices/{id}/delete
// ---------------------------------------------------------------------------

/// Delete an invoice. Invoked from a list-row form, so the response stays on
/// the current page (no redirect).
pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let outcome = actions::invoices::delete_invoice(&state.pool, &id).await;
    realize(&state, outcome)
}
