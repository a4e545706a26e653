//! Repository for the `invoices` table.
//!
//! All statements use positional parameter binding, never string
//! concatenation of values. Each method is a single statement; there are no
//! multi-statement transactions in this flow.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::invoice::{Invoice, InvoiceChanges, InvoiceWithCustomer, NewInvoice};

const COLUMNS: &str = "id, customer_id, amount, status, date";

/// CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice with a generated id, returning the created row.
    pub async fn insert(pool: &PgPool, input: &NewInvoice) -> Result<Invoice, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO invoices (id, customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(&id)
            .bind(&input.customer_id)
            .bind(input.amount)
            .bind(&input.status)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Update customer, amount, and status for the row matching `id`.
    ///
    /// Returns the number of rows affected. Updating a nonexistent id
    /// affects zero rows and is not an error. `date` is never modified.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        changes: &InvoiceChanges,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE invoices SET customer_id = $1, amount = $2, status = $3 WHERE id = $4",
        )
        .bind(&changes.customer_id)
        .bind(changes.amount)
        .bind(&changes.status)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete the row matching `id`, returning the number of rows affected.
    /// Deleting an already-deleted id affects zero rows and is not an error.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Find an invoice by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all invoices joined with their customer names, newest first.
    pub async fn list_with_customers(
        pool: &PgPool,
    ) -> Result<Vec<InvoiceWithCustomer>, sqlx::Error> {
        sqlx::query_as::<_, InvoiceWithCustomer>(
            "SELECT i.id, i.customer_id, c.name AS customer_name, \
                    i.amount, i.status, i.date \
             FROM invoices i \
             JOIN customers c ON c.id = i.customer_id \
             ORDER BY i.date DESC, i.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
