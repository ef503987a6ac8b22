// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Parallel and series traversal operators over ordered sequences.
//!
//! Every operator takes an asynchronous element function, runs it over the
//! present slots of a [`Sequence`](ordinal_core::Sequence) and settles to one
//! aggregate result or one error.
//!
//! | Family | Parallel | Series |
//! |--------|----------|--------|
//! | [`TransformExt`] | `for_each`, `map`, `map_slots`, `filter` | `for_each_series`, `map_series`, `map_slots_series`, `filter_series` |
//! | [`SearchExt`] | `find`, `find_index`, `some`, `every` | `find_series`, `find_index_series`, `some_series`, `every_series` |
//! | [`AccumulateExt`] | | `reduce`, `fold` |
//!
//! Parallel operators invoke the element function for every present slot at
//! once and drive all tasks concurrently inside the returned future. Series
//! operators start each task only after the previous one settled. Aggregates
//! are always ordered by slot index, whatever the completion order.
//!
//! # Example
//!
//! ```
//! use ordinal_core::Sequence;
//! use ordinal_exec::{SearchExt, TransformExt};
//!
//! # #[tokio::main]
//! # async fn main() -> ordinal_core::Result<()> {
//! let ports = Sequence::from(vec![8080u16, 0, 443]);
//!
//! let valid = ports
//!     .filter(|element| async move { Ok::<_, std::io::Error>(element.value != 0) })
//!     .await?;
//! assert_eq!(valid, vec![8080, 443]);
//!
//! let any_privileged = ports
//!     .some_series(|element| async move { Ok::<_, std::io::Error>(element.value < 1024) })
//!     .await?;
//! assert!(any_privileged);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod logging;

pub mod accumulate;
pub mod launch;
pub mod search;
pub mod transform;

pub use accumulate::AccumulateExt;
pub use launch::{ExecutionMode, Launched, ParallelLaunch, SeriesChain};
pub use search::SearchExt;
pub use transform::TransformExt;
