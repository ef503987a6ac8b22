// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::TestError;
use core::future::Future;
use ordinal_core::OrdinalError;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Default upper bound for a traversal under test to settle.
pub const SETTLE_TIMEOUT_MS: u64 = 2_000;

/// Settles `Ok(value)` after `delay_ms`.
pub async fn delayed_ok<T>(value: T, delay_ms: u64) -> Result<T, TestError> {
    sleep(Duration::from_millis(delay_ms)).await;
    Ok(value)
}

/// Settles `Err(TestError)` after `delay_ms`.
pub async fn delayed_err<T>(message: impl Into<String>, delay_ms: u64) -> Result<T, TestError> {
    let message = message.into();
    sleep(Duration::from_millis(delay_ms)).await;
    Err(TestError::new(message))
}

/// A future that never settles.
pub async fn never<T>() -> Result<T, TestError> {
    futures::future::pending().await
}

/// Delay for `index` so that higher indices settle first.
#[must_use]
pub const fn reversed_delay(index: usize, len: usize, step_ms: u64) -> u64 {
    (len.saturating_sub(index) as u64) * step_ms
}

/// Awaits `future`, panicking if it has not settled within [`SETTLE_TIMEOUT_MS`].
pub async fn settle_within<Fut: Future>(future: Fut) -> Fut::Output {
    timeout(Duration::from_millis(SETTLE_TIMEOUT_MS), future)
        .await
        .unwrap_or_else(|_| panic!("traversal did not settle within {SETTLE_TIMEOUT_MS}ms"))
}

/// Panics unless `error` is an element failure at `index` caused by a
/// [`TestError`] with `message`.
pub fn assert_element_failure(error: &OrdinalError, index: usize, message: &str) {
    assert_eq!(error.index(), Some(index), "unexpected error: {error}");
    let source = error
        .downcast_source::<TestError>()
        .unwrap_or_else(|| panic!("expected a TestError source, got {error}"));
    assert_eq!(source, &TestError::new(message));
}
