// SPDX-License-Identifier: Apache-2.0 OR MIT
// Per-call-site occurrence counters for sampled logging

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic occurrence counter for one call site.
///
/// The sampling macros declare one static counter per expansion site. The
/// counter itself is atomically consistent; the every-Nth selection does not
/// guarantee exactly every Nth real occurrence across racing threads, only
/// bounded log volume.
pub struct SampleCounter {
    count: AtomicU64,
}

impl SampleCounter {
    pub const fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    /// Record one occurrence and return the total observed so far.
    #[inline]
    pub fn record(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Occurrences observed so far, without recording one.
    pub fn occurrences(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Whether occurrence number `count` is due for emission at a sampling
    /// interval of `every`: occurrences 1, every+1, 2*every+1, ... are due,
    /// and every occurrence when `every <= 1` (with 0 treated as "never").
    #[inline]
    pub fn should_emit(count: u64, every: u64) -> bool {
        every > 0 && (every == 1 || count % every == 1)
    }
}

impl Default for SampleCounter {
    fn default() -> Self {
        Self::new()
    }
}
