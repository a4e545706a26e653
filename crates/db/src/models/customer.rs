//! Customer models. Only the fields the invoice flows need.

use acme_core::types::EntityId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
}

/// Input for inserting a new customer.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    pub name: String,
}
