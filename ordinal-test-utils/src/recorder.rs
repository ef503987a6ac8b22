// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Invocation recording for element functions.
//!
//! A [`CallRecorder`] is cloned into an element function, which wraps the
//! future it returns with [`CallRecorder::track`]. Tracking starts when the
//! element function runs, i.e. when the traversal invokes it, and ends when the
//! wrapped future settles or is dropped unsettled.
//!
//! ```rust
//! use ordinal_test_utils::CallRecorder;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let recorder = CallRecorder::new();
//! let first = recorder.track(0, async { 1 });
//! let second = recorder.track(1, async { 2 });
//!
//! assert_eq!(recorder.max_concurrency(), 2);
//! assert_eq!(first.await + second.await, 3);
//! assert_eq!(recorder.indices(), vec![0, 1]);
//! # }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::ready;
use pin_project::{pin_project, pinned_drop};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// One recorded invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub index: usize,
    pub started: Instant,
    /// `None` while the call is running or if it was dropped unsettled.
    pub finished: Option<Instant>,
    pub cancelled: bool,
}

impl Call {
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.finished.is_none() && !self.cancelled
    }
}

#[derive(Debug, Default)]
struct RecorderState {
    calls: Vec<Call>,
    active: usize,
    max_active: usize,
}

/// Shared log of element function invocations.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    state: Arc<Mutex<RecorderState>>,
}

impl CallRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records an invocation for `index` and wraps its future.
    pub fn track<Fut: Future>(&self, index: usize, future: Fut) -> Tracked<Fut> {
        let slot = {
            let mut state = self.lock();
            state.calls.push(Call {
                index,
                started: Instant::now(),
                finished: None,
                cancelled: false,
            });
            state.active += 1;
            state.max_active = state.max_active.max(state.active);
            state.calls.len() - 1
        };

        Tracked {
            recorder: self.clone(),
            slot,
            done: false,
            future,
        }
    }

    fn finish(&self, slot: usize, cancelled: bool) {
        let mut state = self.lock();
        state.active -= 1;
        let call = &mut state.calls[slot];
        if cancelled {
            call.cancelled = true;
        } else {
            call.finished = Some(Instant::now());
        }
    }

    /// Every recorded call, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Slot indices in invocation order.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.lock().calls.iter().map(|call| call.index).collect()
    }

    /// Slot indices in the order their futures settled.
    #[must_use]
    pub fn completion_order(&self) -> Vec<usize> {
        let mut finished: Vec<_> = self
            .lock()
            .calls
            .iter()
            .filter_map(|call| call.finished.map(|at| (at, call.index)))
            .collect();
        finished.sort();
        finished.into_iter().map(|(_, index)| index).collect()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    #[must_use]
    pub fn was_called(&self, index: usize) -> bool {
        self.lock().calls.iter().any(|call| call.index == index)
    }

    /// Calls still running right now.
    #[must_use]
    pub fn active(&self) -> usize {
        self.lock().active
    }

    /// Highest number of calls that were running at the same time.
    #[must_use]
    pub fn max_concurrency(&self) -> usize {
        self.lock().max_active
    }

    /// Panics unless every call settled before the next one was invoked.
    pub fn assert_no_overlap(&self) {
        let calls = self.calls();
        for pair in calls.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            let finished = previous.finished.unwrap_or_else(|| {
                panic!(
                    "call for index {} never settled before index {} started",
                    previous.index, next.index
                )
            });
            assert!(
                finished <= next.started,
                "call for index {} overlapped with index {}",
                previous.index,
                next.index
            );
        }
    }
}

/// A future whose invocation is recorded by a [`CallRecorder`].
#[pin_project(PinnedDrop)]
pub struct Tracked<Fut> {
    recorder: CallRecorder,
    slot: usize,
    done: bool,
    #[pin]
    future: Fut,
}

impl<Fut: Future> Future for Tracked<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let output = ready!(this.future.poll(cx));
        if !*this.done {
            *this.done = true;
            this.recorder.finish(*this.slot, false);
        }
        Poll::Ready(output)
    }
}

#[pinned_drop]
impl<Fut> PinnedDrop for Tracked<Fut> {
    fn drop(self: Pin<&mut Self>) {
        let this = self.project();
        if !*this.done {
            this.recorder.finish(*this.slot, true);
        }
    }
}
