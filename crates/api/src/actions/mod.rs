//! Mutation actions.
//!
//! Each action runs the full validated-mutation pipeline for one operation
//! (parse → validate → coerce → persist) and returns a tagged
//! [`MutationOutcome`](acme_core::invoice::MutationOutcome). Side effects
//! that follow a successful outcome (cache invalidation, redirect) belong
//! to the HTTP layer in `crate::handlers`.

pub mod invoices;
