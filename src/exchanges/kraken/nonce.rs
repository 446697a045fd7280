use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Strictly increasing nonce source for private requests
///
/// Values are microseconds since the Unix epoch, bumped by one whenever the
/// clock has not moved past the last value handed out. Concurrent callers
/// never observe the same nonce, and a clock stepping backwards never
/// produces a smaller one.
#[derive(Debug)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::with_seed(now_micros())
    }

    /// Start after `seed`; the first nonce is at least `seed + 1`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            last: AtomicU64::new(seed),
        }
    }

    pub fn generate(&self) -> u64 {
        self.next_at(now_micros())
    }

    fn next_at(&self, now: u64) -> u64 {
        let step = |last: u64| Some(last.saturating_add(1).max(now));
        let (Ok(prev) | Err(prev)) = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, step);
        prev.saturating_add(1).max(now)
    }

    /// Last nonce handed out (or the seed)
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Acquire)
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn now_micros() -> u64 {
    u64::try_from(Utc::now().timestamp_micros()).unwrap_or(0)
}
