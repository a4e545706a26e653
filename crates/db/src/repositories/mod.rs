//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod invoice_repo;

pub use customer_repo::CustomerRepo;
pub use invoice_repo::InvoiceRepo;
