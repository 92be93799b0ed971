//! Per-invocation performance instrumentation.
//!
//! A [`MetricsRecorder`] is attached to exactly one scan invocation. The
//! algorithm increments its counters in-line as primitive operations happen,
//! brackets the scan with [`start_timer`](MetricsRecorder::start_timer) /
//! [`stop_timer`](MetricsRecorder::stop_timer), and hands the recorder back
//! to the caller inside the result. After `stop_timer` the recorder is
//! read-only by convention.
//!
//! Counter values for a given input length are deterministic per variant;
//! elapsed time and the RSS delta are environment-dependent and advisory.

use std::fmt;
use std::time::{Duration, Instant};

/// Resident set size of the current process in bytes.
///
/// Linux reads `/proc/self/statm` (resident pages times the page size from
/// `sysconf`). Other platforms report 0, which downstream consumers must
/// treat as "no data" rather than "no memory used".
#[cfg(target_os = "linux")]
fn rss_bytes() -> u64 {
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    let page_size = if page_size > 0 { page_size as u64 } else { 4096 };
    std::fs::read_to_string("/proc/self/statm")
        .ok()
        .and_then(|content| {
            content
                .split_whitespace()
                .nth(1)
                .and_then(|pages| pages.parse::<u64>().ok())
        })
        .map(|pages| pages * page_size)
        .unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
fn rss_bytes() -> u64 {
    0
}

/// Counter and timer bundle for one algorithm invocation.
///
/// Lifecycle: construct fresh, `start_timer`, increment counters while the
/// scan runs, `stop_timer`, then read. All operations are total; calling the
/// timer methods out of order or repeatedly is crash-free but leaves the
/// timing fields unspecified.
#[derive(Clone, Debug, Default)]
pub struct MetricsRecorder {
    comparisons: u64,
    array_accesses: u64,
    assignments: u64,
    started: Option<Instant>,
    elapsed: Option<Duration>,
    rss_before: u64,
    memory_delta: i64,
}

impl MetricsRecorder {
    /// Field order of the machine-readable row produced by [`csv_row`](Self::csv_row).
    pub const CSV_HEADER: &'static str = "InputSize,Comparisons,ArrayAccesses,TimeMs,MemoryBytes";

    pub fn new() -> Self {
        Self::default()
    }

    /// Record the RSS baseline and the monotonic start instant.
    pub fn start_timer(&mut self) {
        self.rss_before = rss_bytes();
        self.started = Some(Instant::now());
    }

    /// Record the elapsed time and turn the RSS baseline into a delta.
    ///
    /// A second call is a no-op, and a call without a preceding
    /// `start_timer` leaves the elapsed time unset.
    pub fn stop_timer(&mut self) {
        if self.elapsed.is_some() {
            return;
        }
        if let Some(started) = self.started {
            self.elapsed = Some(started.elapsed());
        }
        self.memory_delta = rss_bytes() as i64 - self.rss_before as i64;
    }

    pub fn add_comparisons(&mut self, count: u64) {
        self.comparisons += count;
    }

    pub fn add_array_accesses(&mut self, count: u64) {
        self.array_accesses += count;
    }

    pub fn add_assignments(&mut self, count: u64) {
        self.assignments += count;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn array_accesses(&self) -> u64 {
        self.array_accesses
    }

    pub fn assignments(&self) -> u64 {
        self.assignments
    }

    /// Elapsed wall-clock time in nanoseconds, 0 if the timer never ran.
    pub fn elapsed_nanos(&self) -> u64 {
        self.elapsed.map(|d| d.as_nanos() as u64).unwrap_or(0)
    }

    /// Elapsed wall-clock time in fractional milliseconds.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.map(|d| d.as_secs_f64() * 1_000.0).unwrap_or(0.0)
    }

    /// RSS delta over the timer window, in bytes. Signed: the sample can
    /// shrink. 0 on platforms without memory introspection.
    pub fn memory_delta_bytes(&self) -> i64 {
        self.memory_delta
    }

    /// One data row for tabular export, matching [`Self::CSV_HEADER`].
    /// Writing the row anywhere is the caller's concern.
    pub fn csv_row(&self, input_size: usize) -> String {
        format!(
            "{},{},{},{:.6},{}",
            input_size,
            self.comparisons,
            self.array_accesses,
            self.elapsed_millis(),
            self.memory_delta
        )
    }
}

impl fmt::Display for MetricsRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comparisons: {}, Array Accesses: {}, Time: {:.3} ms, Memory: {} bytes",
            self.comparisons,
            self.array_accesses,
            self.elapsed_millis(),
            self.memory_delta
        )
    }
}
