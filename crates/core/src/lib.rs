//! Domain logic for the invoice dashboard: form validation, mutation
//! outcomes, and typographic configuration for server-rendered pages.
//!
//! This crate is framework-free; HTTP and database concerns live in
//! `acme-api` and `acme-db`.

pub mod error;
pub mod fonts;
pub mod invoice;
pub mod types;
