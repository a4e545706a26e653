//! Invoice models and input structs.

use acme_core::types::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `invoices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: EntityId,
    pub customer_id: EntityId,
    /// Minor currency units (cents).
    pub amount: i64,
    pub status: String,
    /// Calendar date, day precision. Stamped at creation, never updated.
    pub date: NaiveDate,
}

/// Input for inserting a new invoice. The id is generated by the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInvoice {
    pub customer_id: EntityId,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

/// Fields an update may change. `date` is deliberately absent: it is set
/// once at creation and left untouched by updates.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceChanges {
    pub customer_id: EntityId,
    pub amount: i64,
    pub status: String,
}

/// Invoice joined with its customer's display name, for the list page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceWithCustomer {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub customer_name: String,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}
