//! Think-time budget shared by one decision
//!
//! A [`SearchBudget`] is a fixed deadline: start instant plus limit. It is
//! created once per decision, passed down by reference and never reset.
//! Searches poll it at well-defined points (once per minimax call, once per
//! dequeued frontier node) and unwind with [`Cancelled`] when it runs out.

use std::time::{Duration, Instant};

/// Default think time per decision
pub const DEFAULT_THINK_TIME: Duration = Duration::from_millis(900);

/// Signal that the budget ran out mid-search.
///
/// Not an error: the iteration driver absorbs it and keeps the best answer
/// found so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Read-only deadline for one decision.
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    start: Instant,
    limit: Duration,
}

impl SearchBudget {
    /// Budget starting now.
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self::starting_at(Instant::now(), limit)
    }

    /// Budget measured from an earlier instant.
    #[must_use]
    pub fn starting_at(start: Instant, limit: Duration) -> Self {
        Self { start, limit }
    }

    /// Configured limit.
    #[inline]
    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Time spent since the budget started.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left before the deadline, zero once exhausted.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }

    /// Whether the deadline has passed. A zero budget is exhausted at once.
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.elapsed() >= self.limit
    }

    /// `Err(Cancelled)` once the deadline has passed.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] when the budget is exhausted.
    #[inline]
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_exhausted() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(DEFAULT_THINK_TIME)
    }
}
