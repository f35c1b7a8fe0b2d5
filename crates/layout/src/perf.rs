use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Trait for measuring solver performance.
///
/// Without the "profiling" feature the engine uses [`NoOpProfiler`], whose
/// methods compile away.
pub trait Profiler: Send + Sync {
    fn record(&self, key: &str, duration: Duration);
    fn count_node(&self);
    fn reset(&self);

    /// Number of containers solved since the last reset.
    fn nodes_solved(&self) -> usize {
        0
    }

    fn log_summary(&self) {}
}

/// A no-op profiler for production use.
#[derive(Debug, Default)]
pub struct NoOpProfiler;

impl Profiler for NoOpProfiler {
    #[inline(always)]
    fn record(&self, _key: &str, _duration: Duration) {}
    #[inline(always)]
    fn count_node(&self) {}
    #[inline(always)]
    fn reset(&self) {}
}

/// Accumulates durations per key and counts solved containers.
#[derive(Debug)]
pub struct DebugProfiler {
    stats: Mutex<HashMap<String, Duration>>,
    nodes: AtomicUsize,
}

impl DebugProfiler {
    pub fn new() -> Self {
        Self {
            stats: Mutex::new(HashMap::new()),
            nodes: AtomicUsize::new(0),
        }
    }

    /// Total time recorded under `key`.
    pub fn total(&self, key: &str) -> Option<Duration> {
        self.stats.lock().ok()?.get(key).copied()
    }
}

impl Default for DebugProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler for DebugProfiler {
    fn record(&self, key: &str, duration: Duration) {
        if let Ok(mut g) = self.stats.lock() {
            *g.entry(key.to_string()).or_default() += duration;
        }
    }

    fn count_node(&self) {
        self.nodes.fetch_add(1, Ordering::Release);
    }

    fn reset(&self) {
        if let Ok(mut g) = self.stats.lock() {
            g.clear();
        }
        self.nodes.store(0, Ordering::Release);
    }

    fn nodes_solved(&self) -> usize {
        self.nodes.load(Ordering::Acquire)
    }

    fn log_summary(&self) {
        log::info!("=== Solver Profile ===");
        log::info!("Containers solved: {}", self.nodes_solved());
        if let Ok(stats) = self.stats.lock() {
            for (k, v) in stats.iter() {
                log::info!("{}: {:?}", k, v);
            }
        }
    }
}
