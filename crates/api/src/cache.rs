//! Rendered-page cache tracker.
//!
//! Stands in for the framework hook that marks a cached server-rendered
//! view as stale so the next request regenerates it. The tracker keeps a
//! monotonically increasing generation per logical path; invalidating a
//! path bumps its generation, and renderers stamp the generation they were
//! built from so staleness is observable.
//!
//! Invalidation is an explicit post-commit step performed by the HTTP layer
//! after it observes a successful mutation outcome, never from inside the
//! mutation itself. That keeps the mutation functions testable without a
//! cache in the loop.

use std::collections::HashMap;
use std::sync::RwLock;

/// Per-path generation counters. Shared through `AppState` behind an `Arc`.
#[derive(Debug, Default)]
pub struct PageCache {
    generations: RwLock<HashMap<String, u64>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the cached view at `path` stale. Called after every successful
    /// mutation, before any redirect is issued.
    pub fn invalidate(&self, path: &str) {
        let mut generations = self.generations.write().expect("page cache lock poisoned");
        let generation = generations.entry(path.to_string()).or_insert(0);
        *generation += 1;
        tracing::debug!(path, generation = *generation, "Invalidated cached view");
    }

    /// Current generation for `path`. A path that has never been
    /// invalidated is at generation zero.
    pub fn generation(&self, path: &str) -> u64 {
        let generations = self.generations.read().expect("page cache lock poisoned");
        generations.get(path).copied().unwrap_or(0)
    }
}
