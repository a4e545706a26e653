//! Request handlers.
//!
//! Handlers extract HTTP inputs, delegate mutations to `crate::actions`,
//! and realize the returned outcome as an HTTP response. This is also where
//! post-commit cache invalidation happens, always before any redirect.

pub mod invoices;
