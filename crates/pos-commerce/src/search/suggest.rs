//! Latest-wins suggestion state and debounce window.

use std::time::{Duration, Instant};

use crate::catalog::Product;

/// Quiet period between the last keystroke and the search call.
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(100);

/// Latest-wins suggestion state.
///
/// [`begin`](Self::begin) hands out a monotonically increasing sequence
/// number per query; [`apply`](Self::apply) installs a response only when
/// it carries the newest sequence. Responses for superseded queries are
/// discarded, never shown against the now-different input.
#[derive(Debug, Default)]
pub struct SuggestSession {
    latest: u64,
    hits: Vec<Product>,
}

impl SuggestSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the sequence number for a new query, superseding every
    /// query still in flight.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Install a response if it answers the newest query. Returns
    /// whether the hits were applied.
    pub fn apply(&mut self, seq: u64, hits: Vec<Product>) -> bool {
        if seq != self.latest {
            return false;
        }
        self.hits = hits;
        true
    }

    /// Current suggestion list.
    pub fn hits(&self) -> &[Product] {
        &self.hits
    }

    /// Drop the list and invalidate every in-flight response (the input
    /// was cleared or a suggestion was picked).
    pub fn reset(&mut self) {
        self.latest += 1;
        self.hits.clear();
    }
}

/// Re-armable quiet-period window for keystroke-driven queries.
///
/// The caller passes the clock in, so the policy can be driven by any
/// scheduler and tested without sleeping.
#[derive(Debug)]
pub struct DebounceWindow {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceWindow {
    /// Create a window with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Re-arm on a keystroke: the window now ends `delay` after `now`.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether the quiet period has elapsed.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Consume the window if due. Fires at most once per quiet period.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

impl Default for DebounceWindow {
    fn default() -> Self {
        Self::new(SUGGEST_DEBOUNCE)
    }
}
