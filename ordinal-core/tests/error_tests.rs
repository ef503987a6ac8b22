// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ordinal_core::{IntoOrdinalError, OrdinalError, Result};
use std::error::Error;
use std::io;

#[derive(Debug, thiserror::Error)]
#[error("lookup failed for {0}")]
struct LookupError(&'static str);

#[test]
fn test_element_failure_display() {
    let err = OrdinalError::element(3, io::Error::other("disk full"));

    assert_eq!(
        err.to_string(),
        "Element task failed at index 3: disk full"
    );
}

#[test]
fn test_invalid_state_display() {
    let err = OrdinalError::invalid_state("join finished unsettled");

    assert_eq!(err.to_string(), "Invalid state: join finished unsettled");
    assert_eq!(err.index(), None);
    assert!(err.source_error().is_none());
}

#[test]
fn test_into_element_error_keeps_index() {
    let err = LookupError("alice").into_element_error(4);

    assert!(err.is_element_failure());
    assert_eq!(err.index(), Some(4));
}

#[test]
fn test_downcast_source() {
    let err = OrdinalError::element(0, LookupError("bob"));

    assert_eq!(err.downcast_source::<LookupError>().map(|e| e.0), Some("bob"));
    assert!(err.downcast_source::<io::Error>().is_none());
}

#[test]
fn test_source_chain() {
    let err = OrdinalError::element(1, LookupError("carol"));

    let source = err.source().expect("element failure has a source");

    assert_eq!(source.to_string(), "lookup failed for carol");
}

#[test]
fn test_into_source() {
    let err = OrdinalError::element(1, LookupError("dave"));
    let source = err.into_source().unwrap();
    assert_eq!(source.to_string(), "lookup failed for dave");

    let err = OrdinalError::invalid_state("nope");
    assert!(err.into_source().is_err());
}

#[test]
fn test_question_mark_into_anyhow() -> anyhow::Result<()> {
    fn settle() -> Result<u8> {
        Ok(1)
    }

    assert_eq!(settle()?, 1);
    Ok(())
}
