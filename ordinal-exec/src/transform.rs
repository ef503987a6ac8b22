// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::launch::{ExecutionMode, Launched};
use core::future::Future;
use core::pin::pin;
use futures::StreamExt;
use ordinal_core::{Element, IntoOrdinalError, Result, SettleOnce, Traversable, WithContext};
use std::error::Error;

/// Runs `f` over every present slot and collects the outputs aligned with the
/// input slots. The first failure observed settles the whole run.
pub(crate) async fn collect_slots<T, C, F, Fut, U, E>(
    mode: ExecutionMode,
    source: WithContext<T, C>,
    f: F,
) -> Result<Vec<Option<U>>>
where
    T: Clone + Send + Sync + 'static,
    C: Clone + Send + 'static,
    F: Fn(Element<T, C>) -> Fut,
    Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
    U: Send + 'static,
    E: Error + Send + Sync + 'static,
{
    let mut slots: Vec<Option<U>> = std::iter::repeat_with(|| None)
        .take(source.sequence().len())
        .collect();
    let mut outcome = SettleOnce::new();
    let mut launched = pin!(Launched::new(mode, &source, f));

    while let Some((index, settled)) = launched.next().await {
        match settled {
            Ok(value) => slots[index] = Some(value),
            Err(error) => {
                debug!("element task at index {} failed: {}", index, error);
                outcome.reject(error.into_element_error(index));
                break;
            }
        }
    }

    launched.as_mut().abandon();
    outcome.resolve(slots);
    outcome.into_result()
}

/// Extension trait providing the transform family: `for_each`, `map` and
/// `filter`, each in a parallel and a series flavour.
///
/// Element functions receive an owned [`Element`] and return a future of
/// `Result<_, E>`. Every operation is fail-fast: the first failure observed
/// becomes the result of the whole call, wrapped in
/// [`OrdinalError::ElementFailed`](ordinal_core::OrdinalError::ElementFailed)
/// with the failing slot index. Series flavours never start the elements after
/// a failing one; parallel flavours abandon the tasks still in flight.
///
/// Holes are never passed to an element function and do not shift the index
/// reported for later elements.
pub trait TransformExt: Traversable
where
    Self::Item: Clone + Send + Sync + 'static,
    Self::Context: Clone + Send + 'static,
{
    /// Runs `f` on every present element concurrently and waits for all of them.
    ///
    /// # Errors
    ///
    /// Returns the first observed element failure.
    fn for_each<F, Fut, E>(&self, f: F) -> impl Future<Output = Result<()>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Runs `f` on every present element, one at a time, in index order.
    ///
    /// # Errors
    ///
    /// Returns the first element failure; later elements are never started.
    fn for_each_series<F, Fut, E>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<()>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Maps every present element concurrently.
    ///
    /// The output holds one value per present slot, in index order, whatever
    /// order the tasks completed in.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordinal_core::Sequence;
    /// use ordinal_exec::TransformExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> ordinal_core::Result<()> {
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    ///
    /// let doubled = sequence
    ///     .map(|element| async move { Ok::<_, std::io::Error>(element.value * 2) })
    ///     .await?;
    ///
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first observed element failure; no partial output is produced.
    fn map<F, Fut, U, E>(&self, f: F) -> impl Future<Output = Result<Vec<U>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Maps every present element, one at a time, in index order.
    ///
    /// # Errors
    ///
    /// Returns the first element failure; later elements are never started and
    /// no partial output is produced.
    fn map_series<F, Fut, U, E>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<Vec<U>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Like [`map`](Self::map), but the output is aligned with the input slots:
    /// holes stay `None` at their original index.
    ///
    /// ```
    /// use ordinal_core::Sequence;
    /// use ordinal_exec::TransformExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> ordinal_core::Result<()> {
    /// let sequence = Sequence::from_slots(vec![Some(1), None, Some(3)]);
    ///
    /// let slots = sequence
    ///     .map_slots(|element| async move { Ok::<_, std::io::Error>(element.index) })
    ///     .await?;
    ///
    /// assert_eq!(slots, vec![Some(0), None, Some(2)]);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first observed element failure.
    fn map_slots<F, Fut, U, E>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<Vec<Option<U>>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Series flavour of [`map_slots`](Self::map_slots).
    ///
    /// # Errors
    ///
    /// Returns the first element failure; later elements are never started.
    fn map_slots_series<F, Fut, U, E>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<Vec<Option<U>>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Keeps the present elements whose predicate settles `true`, in original order.
    ///
    /// All predicates run concurrently; selection happens once every one settled.
    ///
    /// # Errors
    ///
    /// Returns the first observed predicate failure.
    fn filter<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Vec<Self::Item>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Series flavour of [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure; later elements are never tested.
    fn filter_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Vec<Self::Item>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;
}

impl<S> TransformExt for S
where
    S: Traversable,
    S::Item: Clone + Send + Sync + 'static,
    S::Context: Clone + Send + 'static,
{
    fn for_each<F, Fut, E>(&self, f: F) -> impl Future<Output = Result<()>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let source = self.to_bound();
        async move {
            collect_slots(ExecutionMode::Parallel, source, f).await?;
            Ok(())
        }
    }

    fn for_each_series<F, Fut, E>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<()>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let source = self.to_bound();
        async move {
            collect_slots(ExecutionMode::Series, source, f).await?;
            Ok(())
        }
    }

    fn map<F, Fut, U, E>(&self, f: F) -> impl Future<Output = Result<Vec<U>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let source = self.to_bound();
        async move {
            let slots = collect_slots(ExecutionMode::Parallel, source, f).await?;
            Ok(slots.into_iter().flatten().collect())
        }
    }

    fn map_series<F, Fut, U, E>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<Vec<U>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let source = self.to_bound();
        async move {
            let slots = collect_slots(ExecutionMode::Series, source, f).await?;
            Ok(slots.into_iter().flatten().collect())
        }
    }

    fn map_slots<F, Fut, U, E>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<Vec<Option<U>>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        collect_slots(ExecutionMode::Parallel, self.to_bound(), f)
    }

    fn map_slots_series<F, Fut, U, E>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<Vec<Option<U>>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        U: Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        collect_slots(ExecutionMode::Series, self.to_bound(), f)
    }

    fn filter<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Vec<Self::Item>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        select(ExecutionMode::Parallel, self.to_bound(), predicate)
    }

    fn filter_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Vec<Self::Item>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        select(ExecutionMode::Series, self.to_bound(), predicate)
    }
}

async fn select<T, C, F, Fut, E>(
    mode: ExecutionMode,
    source: WithContext<T, C>,
    predicate: F,
) -> Result<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
    C: Clone + Send + 'static,
    F: Fn(Element<T, C>) -> Fut,
    Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
    E: Error + Send + Sync + 'static,
{
    let sequence = source.sequence().clone();
    let verdicts = collect_slots(mode, source, predicate).await?;

    Ok(sequence
        .present()
        .filter(|(index, _)| verdicts[*index] == Some(true))
        .map(|(_, value)| value.clone())
        .collect())
}
