// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the ordinal traversal library.
//!
//! This crate provides fixture data, an error type for element functions and
//! an invocation recorder for asserting how traversals schedule their work. It
//! is meant for development and testing only, not for production code.
//!
//! # Fixtures
//!
//! ```rust
//! use ordinal_test_utils::test_data::{mixed_roster, person_alice, TestData};
//!
//! let roster = mixed_roster();
//! assert_eq!(roster.get(0), Some(&person_alice()));
//!
//! match person_alice() {
//!     TestData::Person(p) => assert_eq!(p.name, "Alice"),
//!     TestData::Animal(_) => panic!("Expected person"),
//! }
//! ```
//!
//! # Element functions
//!
//! - [`helpers::delayed_ok`] / [`helpers::delayed_err`] settle after a delay
//! - [`helpers::never`] never settles
//! - [`CallRecorder`] logs when each element function was invoked and settled

pub mod error;
pub mod helpers;
pub mod recorder;
pub mod test_data;

pub use error::TestError;
pub use helpers::{delayed_err, delayed_ok, never, reversed_delay, settle_within};
pub use recorder::{Call, CallRecorder, Tracked};
pub use test_data::{Animal, Person, TestData};
