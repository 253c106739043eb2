//! Synthetic processing latency injected before the content scan.
//!
//! The analyzer never touches a shared random source; it asks its [`Delay`]
//! for a duration, so tests can swap in [`NoDelay`] or [`FixedDelay`].

use std::thread;
use std::time::Duration;

use rand::Rng;

/// Default bounds of the simulated latency, in milliseconds (inclusive).
pub const DEFAULT_MIN_DELAY_MS: u64 = 50;
pub const DEFAULT_MAX_DELAY_MS: u64 = 200;

/// Strategy producing the pause taken before scanning a non-empty file.
pub trait Delay: Send + Sync {
    /// Duration of the next pause.
    fn next_delay(&self) -> Duration;

    /// Blocks the current thread for `next_delay()`.
    fn pause(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Uniformly distributed delay in an inclusive millisecond range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomDelay {
    min_ms: u64,
    max_ms: u64,
}

impl RandomDelay {
    /// Bounds are reordered if given backwards.
    #[must_use]
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self {
                min_ms: max_ms,
                max_ms: min_ms,
            }
        }
    }

    #[must_use]
    pub const fn bounds(&self) -> (u64, u64) {
        (self.min_ms, self.max_ms)
    }
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY_MS, DEFAULT_MAX_DELAY_MS)
    }
}

impl Delay for RandomDelay {
    fn next_delay(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }
}

/// Always pauses for the same duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Delay for FixedDelay {
    fn next_delay(&self) -> Duration {
        self.0
    }
}

/// Never pauses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn next_delay(&self) -> Duration {
        Duration::ZERO
    }
}
