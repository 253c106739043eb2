use std::collections::HashSet;
use std::fs;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use super::*;
use crate::analyzer::{Delay, FixedDelay, NoDelay, Status};

/// Sleeps like `FixedDelay` while tracking how many pauses overlap.
#[derive(Default, Clone)]
struct GaugeDelay {
    sleep: Duration,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl GaugeDelay {
    fn new(sleep: Duration) -> Self {
        Self {
            sleep,
            ..Self::default()
        }
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl Delay for GaugeDelay {
    fn next_delay(&self) -> Duration {
        self.sleep
    }

    fn pause(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        thread::sleep(self.sleep);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

fn dispatcher() -> Dispatcher {
    Dispatcher::new(LogAnalyzer::new().with_delay(NoDelay))
}

fn create_logs(dir: &TempDir, count: usize) -> Vec<CheckDescriptor> {
    (0..count)
        .map(|i| {
            let path = dir.path().join(format!("app-{i}.log"));
            fs::write(&path, format!("INFO line from {i}\n")).unwrap();
            CheckDescriptor::new(format!("log-{i}"), path, "app")
        })
        .collect()
}

// =============================================================================
// ConcurrencyLimit
// =============================================================================

#[test]
fn unbounded_uses_one_worker_per_item() {
    assert_eq!(ConcurrencyLimit::Unbounded.worker_count(37), 37);
}

#[test]
fn max_caps_worker_count() {
    let limit = ConcurrencyLimit::Max(NonZeroUsize::new(4).unwrap());
    assert_eq!(limit.worker_count(100), 4);
    assert_eq!(limit.worker_count(2), 2);
}

#[test]
fn worker_count_is_never_zero() {
    assert_eq!(ConcurrencyLimit::Unbounded.worker_count(0), 1);
}

#[test]
fn from_jobs_treats_zero_as_unbounded() {
    assert_eq!(ConcurrencyLimit::from_jobs(None), ConcurrencyLimit::Unbounded);
    assert_eq!(ConcurrencyLimit::from_jobs(Some(0)), ConcurrencyLimit::Unbounded);
    assert_eq!(
        ConcurrencyLimit::from_jobs(Some(8)),
        ConcurrencyLimit::Max(NonZeroUsize::new(8).unwrap())
    );
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn empty_input_yields_empty_output() {
    assert!(dispatcher().dispatch(Vec::new()).is_empty());
}

#[test]
fn one_result_per_descriptor() {
    let dir = TempDir::new().unwrap();
    let descriptors = create_logs(&dir, 12);

    let results = dispatcher().dispatch(descriptors);

    assert_eq!(results.len(), 12);
}

#[test]
fn hundred_files_pair_ids_and_paths_bijectively() {
    let dir = TempDir::new().unwrap();
    let descriptors = create_logs(&dir, 100);
    let expected: HashSet<_> = descriptors
        .iter()
        .map(|d| (d.id.clone(), d.path.clone()))
        .collect();

    let results = Dispatcher::new(LogAnalyzer::new().with_delay(FixedDelay(
        Duration::from_millis(2),
    )))
    .dispatch(descriptors);

    assert_eq!(results.len(), 100);
    assert!(results.iter().all(|r| r.status == Status::Ok));
    let actual: HashSet<_> = results
        .iter()
        .map(|r| (r.id.clone(), r.path.clone()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn failures_do_not_affect_siblings() {
    let dir = TempDir::new().unwrap();
    let mut descriptors = create_logs(&dir, 3);
    descriptors.push(CheckDescriptor::new(
        "missing",
        dir.path().join("nope.log"),
        "app",
    ));
    let bad = dir.path().join("bad.log");
    fs::write(&bad, "INVALID_LINE\n").unwrap();
    descriptors.push(CheckDescriptor::new("bad", bad, "app"));

    let results = dispatcher().dispatch(descriptors);

    assert_eq!(results.len(), 5);
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 3);
    let missing = results.iter().find(|r| r.id == "missing").unwrap();
    assert_eq!(missing.message, "file not found");
    let bad = results.iter().find(|r| r.id == "bad").unwrap();
    assert_eq!(bad.message, "parsing error detected");
}

#[test]
fn duplicate_ids_are_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shared.log");
    fs::write(&path, "INFO\n").unwrap();
    let descriptors = vec![
        CheckDescriptor::new("same", &path, "app"),
        CheckDescriptor::new("same", &path, "app"),
    ];

    let results = dispatcher().dispatch(descriptors);

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.id == "same"));
}

#[test]
fn bounded_pool_completes_every_check() {
    let dir = TempDir::new().unwrap();
    let descriptors = create_logs(&dir, 25);

    let results = dispatcher()
        .with_limit(ConcurrencyLimit::Max(NonZeroUsize::new(2).unwrap()))
        .dispatch(descriptors);

    assert_eq!(results.len(), 25);
}

#[test]
fn bounded_pool_never_exceeds_limit() {
    let dir = TempDir::new().unwrap();
    let descriptors = create_logs(&dir, 12);
    let gauge = GaugeDelay::new(Duration::from_millis(100));

    let results = Dispatcher::new(LogAnalyzer::new().with_delay(gauge.clone()))
        .with_limit(ConcurrencyLimit::Max(NonZeroUsize::new(3).unwrap()))
        .dispatch(descriptors);

    assert_eq!(results.len(), 12);
    assert!(gauge.peak() <= 3, "peak in flight was {}", gauge.peak());
    assert!(gauge.peak() >= 2, "bounded pool ran serially");
}

#[test]
fn unbounded_runs_every_check_at_once() {
    let dir = TempDir::new().unwrap();
    let descriptors = create_logs(&dir, 40);
    let gauge = GaugeDelay::new(Duration::from_millis(150));

    let start = Instant::now();
    let results = Dispatcher::new(LogAnalyzer::new().with_delay(gauge.clone())).dispatch(descriptors);
    let elapsed = start.elapsed();

    assert_eq!(results.len(), 40);
    assert_eq!(gauge.peak(), 40);
    // Serial execution would take 6 s.
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
}

#[test]
fn on_complete_runs_once_per_check() {
    let dir = TempDir::new().unwrap();
    let descriptors = create_logs(&dir, 9);
    let seen = AtomicUsize::new(0);

    let results = dispatcher().dispatch_with(descriptors, &|_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(results.len(), 9);
    assert_eq!(seen.load(Ordering::SeqCst), 9);
}

#[test]
fn limit_accessor_reflects_builder() {
    let limit = ConcurrencyLimit::Max(NonZeroUsize::new(3).unwrap());
    assert_eq!(dispatcher().limit(), ConcurrencyLimit::Unbounded);
    assert_eq!(dispatcher().with_limit(limit).limit(), limit);
}
