//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Plain-data input structs for inserts and updates

pub mod customer;
pub mod invoice;
