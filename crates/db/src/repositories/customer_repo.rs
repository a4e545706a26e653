//! Repository for the `customers` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::customer::{Customer, NewCustomer};

/// Operations on customers used by the invoice flows.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer with a generated id, returning the created row.
    pub async fn insert(pool: &PgPool, input: &NewCustomer) -> Result<Customer, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    /// List all customers ordered by name, for populating invoice forms.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>("SELECT id, name FROM customers ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }
}
