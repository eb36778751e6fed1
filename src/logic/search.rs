use anyhow::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);
pub const DEFAULT_MINIMUM_QUERY_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOption {
    pub label: String,
    pub value: String,
}

/// Caller-supplied remote lookup. Rejections propagate to the caller
/// unchanged; no retry policy lives here.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchOption>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Query under the minimum length: the option list is cleared and the
    /// backend is not consulted.
    Cleared,
    /// Result dropped: a newer query superseded this one during the quiet
    /// period, or the searcher was torn down while the lookup was in flight.
    Discarded,
    Options(Vec<SearchOption>),
}

/// Debounces user-typed queries before invoking the backend. A newer query
/// issued during the quiet period wins; its predecessor never reaches the
/// backend. After `teardown` the lookup itself is not cancelled, only its
/// result is discarded.
pub struct DebouncedSearch<B> {
    backend: Arc<B>,
    debounce: Duration,
    minimum_query_length: usize,
    mounted: AtomicBool,
    pending_generation: Mutex<u64>,
}

impl<B: SearchBackend> DebouncedSearch<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self::with_settings(backend, DEFAULT_DEBOUNCE, DEFAULT_MINIMUM_QUERY_LENGTH)
    }

    pub fn with_settings(backend: Arc<B>, debounce: Duration, minimum_query_length: usize) -> Self {
        Self {
            backend,
            debounce,
            minimum_query_length,
            mounted: AtomicBool::new(true),
            pending_generation: Mutex::new(0),
        }
    }

    /// Feed one typed query through the debounce window.
    pub async fn handle_input(&self, query: &str) -> Result<SearchOutcome> {
        if query.chars().count() < self.minimum_query_length {
            return Ok(SearchOutcome::Cleared);
        }

        let generation = {
            let mut pending = self.pending_generation.lock();
            *pending += 1;
            *pending
        };

        tokio::time::sleep(self.debounce).await;
        if *self.pending_generation.lock() != generation {
            return Ok(SearchOutcome::Discarded);
        }

        let options = self.backend.search(query).await?;
        if !self.mounted.load(Ordering::SeqCst) {
            return Ok(SearchOutcome::Discarded);
        }
        Ok(SearchOutcome::Options(options))
    }

    /// Mark the consumer as gone. In-flight lookups run to completion but
    /// their results are discarded.
    pub fn teardown(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}
