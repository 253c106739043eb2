//! Fan-out/fan-in execution of file checks.
//!
//! Every descriptor gets its own task on a dedicated rayon pool. Finished
//! results go through a completion channel sized to the input, and the pool
//! scope acts as the join barrier: `dispatch` returns only after every task
//! has sent its result.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::mpsc::{self, SyncSender};

use rayon::{Scope, ThreadPoolBuilder};

use crate::analyzer::{AnalysisResult, CheckDescriptor, LogAnalyzer};

/// Upper bound on the number of checks running at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyLimit {
    /// One worker per descriptor.
    #[default]
    Unbounded,
    /// At most this many workers.
    Max(NonZeroUsize),
}

impl ConcurrencyLimit {
    /// `None` and `Some(0)` both mean unbounded.
    #[must_use]
    pub fn from_jobs(jobs: Option<usize>) -> Self {
        jobs.and_then(NonZeroUsize::new)
            .map_or(Self::Unbounded, Self::Max)
    }

    /// Pool size for `items` descriptors (at least one).
    #[must_use]
    pub fn worker_count(self, items: usize) -> usize {
        let items = items.max(1);
        match self {
            Self::Unbounded => items,
            Self::Max(max) => items.min(max.get()),
        }
    }
}

/// Runs one [`LogAnalyzer`] invocation per descriptor, in parallel.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    analyzer: Arc<LogAnalyzer>,
    limit: ConcurrencyLimit,
}

impl Dispatcher {
    #[must_use]
    pub fn new(analyzer: LogAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            limit: ConcurrencyLimit::Unbounded,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: ConcurrencyLimit) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn limit(&self) -> ConcurrencyLimit {
        self.limit
    }

    /// Checks every descriptor and returns exactly one result per descriptor.
    ///
    /// Results are in completion order, not input order.
    #[must_use]
    pub fn dispatch(&self, descriptors: Vec<CheckDescriptor>) -> Vec<AnalysisResult> {
        self.dispatch_with(descriptors, &|_| {})
    }

    /// Like [`dispatch`](Self::dispatch), calling `on_complete` from the worker
    /// thread as each check finishes.
    #[must_use]
    pub fn dispatch_with(
        &self,
        descriptors: Vec<CheckDescriptor>,
        on_complete: &(dyn Fn(&AnalysisResult) + Sync),
    ) -> Vec<AnalysisResult> {
        let total = descriptors.len();
        if total == 0 {
            return Vec::new();
        }

        let (tx, rx) = mpsc::sync_channel(total);
        let analyzer = self.analyzer.as_ref();
        let workers = self.limit.worker_count(total);

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("logcheck-worker-{i}"))
            .build();
        match pool {
            Ok(pool) => pool.scope(|s| spawn_all(s, analyzer, descriptors, &tx, on_complete)),
            // Fall back to the global pool rather than failing the whole run.
            Err(_) => rayon::scope(|s| spawn_all(s, analyzer, descriptors, &tx, on_complete)),
        }

        // All senders are gone once the scope has joined; this only drops ours.
        drop(tx);
        rx.into_iter().collect()
    }
}

fn spawn_all<'scope>(
    scope: &Scope<'scope>,
    analyzer: &'scope LogAnalyzer,
    descriptors: Vec<CheckDescriptor>,
    tx: &SyncSender<AnalysisResult>,
    on_complete: &'scope (dyn Fn(&AnalysisResult) + Sync),
) {
    for descriptor in descriptors {
        let tx = tx.clone();
        scope.spawn(move |_| {
            let result = analyzer.analyze(&descriptor);
            on_complete(&result);
            // Capacity equals the task count, so this never blocks; the receiver
            // outlives the scope, so it never fails.
            let _ = tx.send(result);
        });
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
