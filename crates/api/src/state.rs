use std::sync::Arc;

use crate::cache::PageCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is injected here rather than held as process-wide implicit state,
/// so tests can substitute their own transactional pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: acme_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Rendered-page cache tracker; mutations invalidate paths here.
    pub page_cache: Arc<PageCache>,
}
