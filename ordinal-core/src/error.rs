// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::doc_markdown)]
//! Error types for ordinal traversal operations
//!
//! Every traversal settles to a single value or a single [`OrdinalError`]. A failure
//! raised by a caller-supplied element function is wrapped together with the index
//! of the slot it was invoked on, so the caller can tell which element broke the run.
//!
//! # Examples
//!
//! ```
//! use ordinal_core::{OrdinalError, Result};
//!
//! fn check(index: usize, value: i32) -> Result<i32> {
//!     if value < 0 {
//!         let err = std::io::Error::other("negative input");
//!         return Err(OrdinalError::element(index, err));
//!     }
//!     Ok(value)
//! }
//!
//! let err = check(3, -1).unwrap_err();
//! assert_eq!(err.index(), Some(3));
//! ```

use std::error::Error;

/// Root error type for all ordinal operations
#[derive(Debug, thiserror::Error)]
pub enum OrdinalError {
    /// A caller-supplied element function failed
    ///
    /// The first observed failure terminates the whole traversal. `index` is the
    /// original slot index of the element, holes included.
    #[error("Element task failed at index {index}: {source}")]
    ElementFailed {
        /// Slot index the failing element function was invoked on
        index: usize,
        /// The error returned by the element function
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// A traversal reached a state it should never reach
    ///
    /// Reported instead of panicking, for example when a join finished without
    /// anything having settled its outcome.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state
        message: String,
    },
}

impl OrdinalError {
    /// Wrap the failure of the element function invoked on slot `index`
    pub fn element(index: usize, error: impl Error + Send + Sync + 'static) -> Self {
        Self::ElementFailed {
            index,
            source: Box::new(error),
        }
    }

    /// Create an invalid state error with the given message
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Slot index of the failing element, if this is an element failure
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::ElementFailed { index, .. } => Some(*index),
            Self::InvalidState { .. } => None,
        }
    }

    /// Whether this failure came from an element function.
    #[must_use]
    pub const fn is_element_failure(&self) -> bool {
        matches!(self, Self::ElementFailed { .. })
    }

    /// The error returned by the element function, if any
    #[must_use]
    pub fn source_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::ElementFailed { source, .. } => Some(source.as_ref()),
            Self::InvalidState { .. } => None,
        }
    }

    /// Downcast the element function's error back to its concrete type
    ///
    /// # Examples
    ///
    /// ```
    /// use ordinal_core::OrdinalError;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("rejected: {0}")]
    /// struct Rejected(u32);
    ///
    /// let err = OrdinalError::element(1, Rejected(7));
    /// assert_eq!(err.downcast_source::<Rejected>().map(|r| r.0), Some(7));
    /// ```
    #[must_use]
    pub fn downcast_source<E: Error + 'static>(&self) -> Option<&E> {
        self.source_error().and_then(|source| source.downcast_ref::<E>())
    }

    /// Consume the error and return the element function's error
    ///
    /// # Errors
    /// Returns `Err(self)` if this is not an element failure.
    pub fn into_source(self) -> std::result::Result<Box<dyn Error + Send + Sync>, Self> {
        match self {
            Self::ElementFailed { source, .. } => Ok(source),
            other => Err(other),
        }
    }
}

/// Specialized Result type for ordinal operations
///
/// # Examples
///
/// ```
/// use ordinal_core::Result;
///
/// fn count() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, OrdinalError>;

/// Extension trait for converting element function errors into `OrdinalError`
///
/// Automatically implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoOrdinalError {
    /// Convert this error into the failure of the element at `index`
    fn into_element_error(self, index: usize) -> OrdinalError;
}

impl<E: Error + Send + Sync + 'static> IntoOrdinalError for E {
    fn into_element_error(self, index: usize) -> OrdinalError {
        OrdinalError::element(index, self)
    }
}
