// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Execution-mode primitives.
//!
//! Both primitives turn a [`Traversable`] and an element function into a stream
//! of `(index, output)` pairs, one per present slot:
//!
//! - [`ParallelLaunch`] invokes the element function for every present slot up
//!   front and drives all tasks concurrently; pairs come out in completion order.
//! - [`SeriesChain`] invokes the element function for the next slot only after
//!   the previous task settled; pairs come out in index order. A consumer that
//!   stops polling never starts the remaining elements.
//!
//! Neither primitive decides success or failure. That policy belongs to the
//! traversal families built on top of [`Launched`].

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::ready;
use futures::stream::{FusedStream, Stream, StreamExt};
use futures_util::stream::FuturesUnordered;
use ordinal_core::{Element, Elements, Traversable};
use pin_project::pin_project;
use std::collections::VecDeque;

/// How the element tasks of one traversal are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// All element tasks in flight at once.
    #[default]
    Parallel,
    /// One element task at a time, in index order.
    Series,
}

/// A future tagged with the slot index it was launched for.
#[pin_project]
#[derive(Debug)]
pub struct Indexed<Fut> {
    index: usize,
    #[pin]
    future: Fut,
}

impl<Fut> Indexed<Fut> {
    pub const fn new(index: usize, future: Fut) -> Self {
        Self { index, future }
    }

    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<Fut: Future> Future for Indexed<Fut> {
    type Output = (usize, Fut::Output);

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let output = ready!(this.future.poll(cx));
        Poll::Ready((*this.index, output))
    }
}

/// Every element task started at once.
///
/// The element function runs for every present slot when the launch is built.
/// The first poll then drives each task once before any settled pair is handed
/// out, so no task waits on a sibling to get started.
#[pin_project]
pub struct ParallelLaunch<Fut: Future> {
    tasks: FuturesUnordered<Indexed<Fut>>,
    settled: VecDeque<(usize, Fut::Output)>,
    primed: bool,
}

impl<Fut: Future> ParallelLaunch<Fut> {
    pub fn new<S, F>(source: &S, f: &F) -> Self
    where
        S: Traversable,
        S::Item: Clone,
        S::Context: Clone,
        F: Fn(Element<S::Item, S::Context>) -> Fut,
    {
        let tasks = source
            .elements()
            .map(|element| Indexed::new(element.index, f(element)))
            .collect();
        Self {
            tasks,
            settled: VecDeque::new(),
            primed: false,
        }
    }

    /// Tasks launched but not settled yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Give up on the tasks still in flight.
    ///
    /// With the `runtime-tokio` feature and a current tokio runtime, the
    /// remaining tasks are moved onto the runtime and driven to completion with
    /// their outputs discarded. Otherwise they are dropped, which cancels them
    /// at their next suspension point.
    pub fn abandon(&mut self)
    where
        Fut: Send + 'static,
        Fut::Output: Send,
    {
        self.settled.clear();
        let remaining = self.tasks.len();
        if remaining == 0 {
            return;
        }

        let tasks = core::mem::take(&mut self.tasks);

        #[cfg(feature = "runtime-tokio")]
        {
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                debug!("driving {} abandoned element tasks to completion", remaining);
                let mut tasks = tasks;
                handle.spawn(async move { while tasks.next().await.is_some() {} });
                return;
            }
        }

        debug!("dropping {} in-flight element tasks", remaining);
        drop(tasks);
    }
}

impl<Fut: Future> Stream for ParallelLaunch<Fut> {
    type Item = (usize, Fut::Output);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if !*this.primed {
            *this.primed = true;
            while let Poll::Ready(Some(settled)) = this.tasks.poll_next_unpin(cx) {
                this.settled.push_back(settled);
            }
        }

        if let Some(settled) = this.settled.pop_front() {
            return Poll::Ready(Some(settled));
        }

        this.tasks.poll_next_unpin(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.settled.len() + self.tasks.len();
        (remaining, Some(remaining))
    }
}

impl<Fut: Future> FusedStream for ParallelLaunch<Fut> {
    fn is_terminated(&self) -> bool {
        self.primed && self.settled.is_empty() && self.tasks.is_empty()
    }
}

/// One element task at a time, each started after the previous one settled.
#[pin_project]
pub struct SeriesChain<T, C, F, Fut> {
    pending: Elements<T, C>,
    f: F,
    #[pin]
    current: Option<Indexed<Fut>>,
}

impl<T, C, F, Fut> SeriesChain<T, C, F, Fut>
where
    T: Clone,
    C: Clone,
{
    pub fn new<S>(source: &S, f: F) -> Self
    where
        S: Traversable<Item = T, Context = C>,
    {
        Self {
            pending: source.elements(),
            f,
            current: None,
        }
    }

    /// `1` while an element task is running, `0` otherwise.
    pub fn in_flight(&self) -> usize {
        usize::from(self.current.is_some())
    }
}

impl<T, C, F, Fut> Stream for SeriesChain<T, C, F, Fut>
where
    T: Clone,
    C: Clone,
    F: Fn(Element<T, C>) -> Fut,
    Fut: Future,
{
    type Item = (usize, Fut::Output);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(task) = this.current.as_mut().as_pin_mut() {
                let settled = ready!(task.poll(cx));
                this.current.set(None);
                return Poll::Ready(Some(settled));
            }

            match this.pending.next() {
                Some(element) => {
                    let index = element.index;
                    let task = (this.f)(element);
                    this.current.set(Some(Indexed::new(index, task)));
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

/// A launched traversal in either execution mode.
#[pin_project(project = LaunchedProj)]
pub enum Launched<T, C, F, Fut: Future> {
    Parallel(ParallelLaunch<Fut>),
    Series(#[pin] SeriesChain<T, C, F, Fut>),
}

impl<T, C, F, Fut> Launched<T, C, F, Fut>
where
    T: Clone,
    C: Clone,
    F: Fn(Element<T, C>) -> Fut,
    Fut: Future,
{
    pub fn new<S>(mode: ExecutionMode, source: &S, f: F) -> Self
    where
        S: Traversable<Item = T, Context = C>,
    {
        match mode {
            ExecutionMode::Parallel => Self::parallel(source, f),
            ExecutionMode::Series => Self::series(source, f),
        }
    }

    pub fn parallel<S>(source: &S, f: F) -> Self
    where
        S: Traversable<Item = T, Context = C>,
    {
        Self::Parallel(ParallelLaunch::new(source, &f))
    }

    pub fn series<S>(source: &S, f: F) -> Self
    where
        S: Traversable<Item = T, Context = C>,
    {
        Self::Series(SeriesChain::new(source, f))
    }

    pub const fn mode(&self) -> ExecutionMode {
        match self {
            Self::Parallel(_) => ExecutionMode::Parallel,
            Self::Series(_) => ExecutionMode::Series,
        }
    }

    pub fn in_flight(&self) -> usize {
        match self {
            Self::Parallel(launch) => launch.in_flight(),
            Self::Series(chain) => chain.in_flight(),
        }
    }

    /// Stop consuming this traversal.
    ///
    /// A series chain simply never starts its remaining elements. A parallel
    /// launch hands its in-flight tasks to [`ParallelLaunch::abandon`].
    pub fn abandon(self: Pin<&mut Self>)
    where
        Fut: Send + 'static,
        Fut::Output: Send,
    {
        match self.project() {
            LaunchedProj::Parallel(launch) => launch.abandon(),
            LaunchedProj::Series(_) => {}
        }
    }
}

impl<T, C, F, Fut> Stream for Launched<T, C, F, Fut>
where
    T: Clone,
    C: Clone,
    F: Fn(Element<T, C>) -> Fut,
    Fut: Future,
{
    type Item = (usize, Fut::Output);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.project() {
            LaunchedProj::Parallel(launch) => launch.poll_next_unpin(cx),
            LaunchedProj::Series(chain) => chain.poll_next(cx),
        }
    }
}
