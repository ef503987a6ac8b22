// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Ordinal
//!
//! Parallel and series traversal of ordered, possibly sparse sequences with
//! asynchronous element functions.
//!
//! ## Overview
//!
//! A [`Sequence`] is a list of slots, some of which may be holes. The traversal
//! families run an asynchronous element function over every present slot and
//! settle to a single aggregate or a single [`OrdinalError`]:
//!
//! - [`TransformExt`]: `for_each`, `map`, `map_slots`, `filter`
//! - [`SearchExt`]: `find`, `find_index`, `some`, `every`
//! - [`AccumulateExt`]: `reduce`, `fold`
//!
//! Each transform and search operation comes in a parallel flavour, which
//! starts every element at once, and a `_series` flavour, which starts each
//! element only after the previous one settled. Results are always reported in
//! slot order, holes are never visited, and indices are the original slot
//! indices.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordinal_rx::prelude::*;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("lookup failed")]
//! struct LookupError;
//!
//! # #[tokio::main]
//! # async fn main() -> ordinal_rx::Result<()> {
//! let hosts = Sequence::from_slots(vec![Some("alpha"), None, Some("gamma")]);
//!
//! let lengths = hosts
//!     .map(|element| async move { Ok::<_, LookupError>(element.value.len()) })
//!     .await?;
//! assert_eq!(lengths, vec![5, 5]);
//!
//! let first_g = hosts
//!     .find_index_series(|element| async move {
//!         Ok::<_, LookupError>(element.value.starts_with('g'))
//!     })
//!     .await?;
//! assert_eq!(first_g, Some(2));
//! # Ok(())
//! # }
//! ```
//!
//! ## Invocation context
//!
//! Bind a value with [`Sequence::with_context`] to hand it to every element
//! function invocation:
//!
//! ```rust
//! use ordinal_rx::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> ordinal_rx::Result<()> {
//! let prices = Sequence::from(vec![100u32, 250, 40]);
//!
//! let discounted = prices
//!     .with_context(10u32)
//!     .map_series(|element| async move {
//!         Ok::<_, std::io::Error>(element.value - element.value * element.context / 100)
//!     })
//!     .await?;
//! assert_eq!(discounted, vec![90, 225, 36]);
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use ordinal_core::{
    Element, IntoOrdinalError, OrdinalError, Result, Sequence, SettleOnce, Traversable,
    WithContext,
};

// Re-export the traversal families
pub use ordinal_exec::{AccumulateExt, ExecutionMode, SearchExt, TransformExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use ordinal_core::{Element, OrdinalError, Sequence, Traversable, WithContext};
    pub use ordinal_exec::{AccumulateExt, SearchExt, TransformExt};
}
