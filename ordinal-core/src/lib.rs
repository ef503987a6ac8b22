// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types for ordered asynchronous traversal.
//!
//! - [`Sequence`]: an immutable, shareable, possibly sparse list of slots
//! - [`Element`]: what an element function receives for one present slot
//! - [`Traversable`] / [`WithContext`]: a sequence plus its invocation context
//! - [`SettleOnce`]: the first-settle-wins outcome cell used by concurrent joins
//! - [`OrdinalError`] / [`Result`]: the error surface of every traversal

#[macro_use]
mod logging;

pub mod error;
pub mod sequence;
pub mod settle_once;
pub mod traversable;

pub use self::error::{IntoOrdinalError, OrdinalError, Result};
pub use self::sequence::Sequence;
pub use self::settle_once::SettleOnce;
pub use self::traversable::{Element, Elements, Traversable, WithContext};
