// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::launch::{ExecutionMode, Launched};
use core::future::Future;
use core::pin::pin;
use futures::StreamExt;
use ordinal_core::{Element, IntoOrdinalError, Result, SettleOnce, Traversable, WithContext};
use std::error::Error;

/// Settles with the lowest slot index whose predicate holds.
///
/// A `true` verdict at index `j` only settles the search once every present
/// slot below `j` settled `false`, so the answer never depends on completion
/// order. Holes count as `false` from the start.
async fn first_match<T, C, F, Fut, E>(
    mode: ExecutionMode,
    source: WithContext<T, C>,
    predicate: F,
) -> Result<Option<usize>>
where
    T: Clone + Send + Sync + 'static,
    C: Clone + Send + 'static,
    F: Fn(Element<T, C>) -> Fut,
    Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
    E: Error + Send + Sync + 'static,
{
    let mut verdicts: Vec<Option<bool>> = source
        .sequence()
        .slots()
        .iter()
        .map(|slot| slot.as_ref().map_or(Some(false), |_| None))
        .collect();
    let mut cursor = 0;
    let mut outcome = SettleOnce::new();
    let mut launched = pin!(Launched::new(mode, &source, predicate));

    while let Some((index, settled)) = launched.next().await {
        match settled {
            Ok(found) => verdicts[index] = Some(found),
            Err(error) => {
                debug!("predicate at index {} failed: {}", index, error);
                outcome.reject(error.into_element_error(index));
                break;
            }
        }

        while verdicts.get(cursor) == Some(&Some(false)) {
            cursor += 1;
        }
        match verdicts.get(cursor) {
            Some(Some(true)) => {
                outcome.resolve(Some(cursor));
                break;
            }
            None => {
                outcome.resolve(None);
                break;
            }
            Some(_) => {}
        }
    }

    launched.as_mut().abandon();
    outcome.resolve(None);
    outcome.into_result()
}

/// Settles `true` as soon as any predicate settles with `decisive`, `false`
/// once every predicate settled with the opposite verdict.
async fn short_circuit<T, C, F, Fut, E>(
    mode: ExecutionMode,
    source: WithContext<T, C>,
    predicate: F,
    decisive: bool,
) -> Result<bool>
where
    T: Clone + Send + Sync + 'static,
    C: Clone + Send + 'static,
    F: Fn(Element<T, C>) -> Fut,
    Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
    E: Error + Send + Sync + 'static,
{
    let mut outcome = SettleOnce::new();
    let mut launched = pin!(Launched::new(mode, &source, predicate));

    while let Some((index, settled)) = launched.next().await {
        match settled {
            Ok(verdict) if verdict == decisive => {
                outcome.resolve(true);
                break;
            }
            Ok(_) => {}
            Err(error) => {
                debug!("predicate at index {} failed: {}", index, error);
                outcome.reject(error.into_element_error(index));
                break;
            }
        }
    }

    launched.as_mut().abandon();
    outcome.resolve(false);
    outcome.into_result()
}

/// Extension trait providing the search family: `find`, `find_index`, `some`
/// and `every`, each in a parallel and a series flavour.
///
/// Searches settle as soon as their answer is known. Series flavours never
/// start the predicates after the deciding one. Parallel flavours abandon the
/// predicates still in flight; whatever those settle with afterwards, failures
/// included, is ignored.
///
/// A predicate failure observed before the answer is known settles the whole
/// search with that failure.
pub trait SearchExt: Traversable
where
    Self::Item: Clone + Send + Sync + 'static,
    Self::Context: Clone + Send + 'static,
{
    /// The present element with the lowest index whose predicate settles `true`.
    ///
    /// Predicates run concurrently, but the answer is decided by index, not by
    /// completion order: a match at a higher index waits for every lower one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordinal_core::Sequence;
    /// use ordinal_exec::SearchExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> ordinal_core::Result<()> {
    /// let sequence = Sequence::from(vec![3, 8, 12]);
    ///
    /// let found = sequence
    ///     .find(|element| async move { Ok::<_, std::io::Error>(element.value > 5) })
    ///     .await?;
    ///
    /// assert_eq!(found, Some(8));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure observed before the answer is known.
    fn find<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Option<Self::Item>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Series flavour of [`find`](Self::find): stops at the first match.
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure; later elements are never tested.
    fn find_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Option<Self::Item>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Slot index of the first present element whose predicate settles `true`.
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure observed before the answer is known.
    fn find_index<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Option<usize>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Series flavour of [`find_index`](Self::find_index).
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure; later elements are never tested.
    fn find_index_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Option<usize>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// `true` as soon as any predicate settles `true`.
    ///
    /// Which predicate decides depends on completion order. Settles `false`
    /// only after every predicate settled `false`, and for an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure observed before the answer is known.
    fn some<F, Fut, E>(&self, predicate: F) -> impl Future<Output = Result<bool>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Series flavour of [`some`](Self::some).
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure; later elements are never tested.
    fn some_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<bool>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// `false` as soon as any predicate settles `false`.
    ///
    /// Settles `true` once every predicate settled `true`, and for an empty
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure observed before the answer is known.
    fn every<F, Fut, E>(&self, predicate: F) -> impl Future<Output = Result<bool>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Series flavour of [`every`](Self::every).
    ///
    /// # Errors
    ///
    /// Returns the first predicate failure; later elements are never tested.
    fn every_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<bool>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;
}

impl<S> SearchExt for S
where
    S: Traversable,
    S::Item: Clone + Send + Sync + 'static,
    S::Context: Clone + Send + 'static,
{
    fn find<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Option<Self::Item>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        find_value(ExecutionMode::Parallel, self.to_bound(), predicate)
    }

    fn find_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Option<Self::Item>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        find_value(ExecutionMode::Series, self.to_bound(), predicate)
    }

    fn find_index<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Option<usize>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        first_match(ExecutionMode::Parallel, self.to_bound(), predicate)
    }

    fn find_index_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<Option<usize>>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        first_match(ExecutionMode::Series, self.to_bound(), predicate)
    }

    fn some<F, Fut, E>(&self, predicate: F) -> impl Future<Output = Result<bool>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        short_circuit(ExecutionMode::Parallel, self.to_bound(), predicate, true)
    }

    fn some_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<bool>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        short_circuit(ExecutionMode::Series, self.to_bound(), predicate, true)
    }

    fn every<F, Fut, E>(&self, predicate: F) -> impl Future<Output = Result<bool>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let source = self.to_bound();
        async move {
            let failed = short_circuit(ExecutionMode::Parallel, source, predicate, false).await?;
            Ok(!failed)
        }
    }

    fn every_series<F, Fut, E>(
        &self,
        predicate: F,
    ) -> impl Future<Output = Result<bool>> + Send + 'static
    where
        F: Fn(Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let source = self.to_bound();
        async move {
            let failed = short_circuit(ExecutionMode::Series, source, predicate, false).await?;
            Ok(!failed)
        }
    }
}

async fn find_value<T, C, F, Fut, E>(
    mode: ExecutionMode,
    source: WithContext<T, C>,
    predicate: F,
) -> Result<Option<T>>
where
    T: Clone + Send + Sync + 'static,
    C: Clone + Send + 'static,
    F: Fn(Element<T, C>) -> Fut,
    Fut: Future<Output = core::result::Result<bool, E>> + Send + 'static,
    E: Error + Send + Sync + 'static,
{
    let sequence = source.sequence().clone();
    let index = first_match(mode, source, predicate).await?;
    Ok(index.and_then(|index| sequence.get(index).cloned()))
}
