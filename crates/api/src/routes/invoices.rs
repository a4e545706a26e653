//! Route definitions for invoices — mounted at `/dashboard/invoices`.
//!
//! ```text
//! GET    /               invoices_page (list)
//! POST   /               create_invoice
//! POST   /{id}           update_invoice
//! GET    /{id}/edit      edit_invoice_page
//! POST   /{id}/delete    delete_invoice
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::invoices;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(invoices::invoices_page).post(invoices::create_invoice),
        )
        .route("/{id}", post(invoices::update_invoice))
        .route("/{id}/edit", get(invoices::edit_invoice_page))
        .route("/{id}/delete", post(invoices::delete_invoice))
}
