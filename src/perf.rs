//! Input latency tracking.
//!
//! [`PerfMonitor`] keeps a rolling window of handler timings per input kind;
//! the session reports handlers whose p95 exceeds [`TARGET_EVENT_MS`] on
//! shutdown. `profile_scope!` marks finer-grained hot spots and compiles to
//! nothing unless the `profiling` feature is enabled:
//!
//! ```ignore
//! fn pointer_move(&mut self, ...) {
//!     profile_scope!("pointer_move");
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Per-event latency target, in milliseconds
pub const TARGET_EVENT_MS: f64 = 4.0;

/// Scopes shorter than this are not reported by `profile_scope!`
const SCOPE_REPORT_MS: f64 = 1.0;

const WINDOW: usize = 100;

#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope = $crate::perf::ScopedTimer::start($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// Timings of one input handler over its most recent calls
#[derive(Debug, Clone, Default)]
pub struct HandlerStats {
    recent: VecDeque<f64>,
    calls: u64,
    worst: f64,
}

impl HandlerStats {
    fn record(&mut self, ms: f64) {
        if self.recent.len() == WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(ms);
        self.calls += 1;
        self.worst = self.worst.max(ms);
    }

    /// Total calls, including those that fell out of the window
    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn worst(&self) -> f64 {
        self.worst
    }

    pub fn mean(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        self.recent.iter().sum::<f64>() / self.recent.len() as f64
    }

    pub fn p95(&self) -> f64 {
        let mut sorted: Vec<f64> = self.recent.iter().copied().collect();
        sorted.sort_by(f64::total_cmp);
        let idx = (sorted.len() * 95 / 100).min(sorted.len().saturating_sub(1));
        sorted.get(idx).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Default)]
pub struct PerfMonitor {
    handlers: HashMap<&'static str, HandlerStats>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` and record its duration under `name`
    pub fn time<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(name, start.elapsed().as_secs_f64() * 1000.0);
        result
    }

    pub fn record(&mut self, name: &'static str, ms: f64) {
        self.handlers.entry(name).or_default().record(ms);
    }

    pub fn stats(&self, name: &str) -> Option<&HandlerStats> {
        self.handlers.get(name)
    }

    /// Handlers whose p95 is above target, slowest first
    pub fn slow_handlers(&self) -> Vec<(&'static str, &HandlerStats)> {
        let mut slow: Vec<_> = self
            .handlers
            .iter()
            .filter(|(_, s)| s.p95() > TARGET_EVENT_MS)
            .map(|(name, s)| (*name, s))
            .collect();
        slow.sort_by(|a, b| b.1.p95().total_cmp(&a.1.p95()));
        slow
    }

    pub fn log_summary_if_slow(&self) {
        for (name, stats) in self.slow_handlers() {
            tracing::warn!(
                handler = name,
                mean_ms = format!("{:.2}", stats.mean()),
                p95_ms = format!("{:.2}", stats.p95()),
                worst_ms = format!("{:.2}", stats.worst()),
                calls = stats.calls(),
                "Input handler above latency target"
            );
        }
    }
}

/// Traces its own lifetime on drop when it ran longer than a millisecond
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if ms > SCOPE_REPORT_MS {
            tracing::trace!("[PERF] {}: {:.2}ms", self.name, ms);
        }
    }
}
