//! Acme dashboard API server library.
//!
//! Exposes the building blocks (config, state, actions, routes, page cache)
//! so integration tests and the binary entrypoint can both access them.

pub mod actions;
pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod routes;
pub mod state;
