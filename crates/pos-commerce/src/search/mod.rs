//! Product search support for the checkout input.
//!
//! Keystroke-driven lookups are debounced and answered out of order at
//! the network's whim; this module owns the state that keeps only the
//! newest query's results.

mod suggest;

pub use suggest::{DebounceWindow, SuggestSession, SUGGEST_DEBOUNCE};
