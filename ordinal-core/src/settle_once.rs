// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-assignment outcome cell for concurrent joins.

use crate::error::{OrdinalError, Result};

/// Holds the outcome of a join in which several tasks race to settle it.
///
/// Only the first call to [`resolve`](Self::resolve) or [`reject`](Self::reject)
/// is observable; every later call is a no-op that returns `false`.
///
/// # Example
///
/// ```
/// use ordinal_core::{OrdinalError, SettleOnce};
///
/// let mut outcome = SettleOnce::new();
/// assert!(outcome.resolve(1));
/// assert!(!outcome.resolve(2));
/// assert!(!outcome.reject(OrdinalError::invalid_state("late")));
///
/// assert_eq!(outcome.into_result().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct SettleOnce<T> {
    outcome: Option<Result<T>>,
}

impl<T> SettleOnce<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { outcome: None }
    }

    /// Settle with a value. Returns `true` if this call won.
    pub fn resolve(&mut self, value: T) -> bool {
        self.settle(Ok(value))
    }

    /// Settle with a failure. Returns `true` if this call won.
    pub fn reject(&mut self, error: OrdinalError) -> bool {
        self.settle(Err(error))
    }

    /// Settle with either outcome. Returns `true` if this call won.
    pub fn settle(&mut self, outcome: Result<T>) -> bool {
        if self.outcome.is_some() {
            debug!(
                "ignoring late settlement (failure: {})",
                outcome.is_err()
            );
            return false;
        }
        self.outcome = Some(outcome);
        true
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.outcome.is_some()
    }

    /// Take the winning outcome, or `None` if nothing settled yet.
    pub fn into_outcome(self) -> Option<Result<T>> {
        self.outcome
    }

    /// Take the winning outcome.
    ///
    /// # Errors
    /// Returns the settled failure, or `OrdinalError::InvalidState` if nothing
    /// settled the cell.
    pub fn into_result(self) -> Result<T> {
        self.outcome
            .unwrap_or_else(|| Err(OrdinalError::invalid_state("join finished unsettled")))
    }
}

impl<T> Default for SettleOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}
