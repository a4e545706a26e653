pub mod health;
pub mod invoices;

use axum::Router;

use crate::state::AppState;

/// Build the `/dashboard` route tree.
///
/// ```text
/// /invoices                 GET list page, POST create
/// /invoices/{id}            POST update
/// /invoices/{id}/edit       GET edit page
/// /invoices/{id}/delete     POST delete
/// ```
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().nest("/invoices", invoices::router())
}
