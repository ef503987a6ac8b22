// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use ordinal_core::{Element, Elements, IntoOrdinalError, Result, Traversable};
use std::error::Error;

async fn fold_elements<T, C, A, F, Fut, E>(
    elements: Elements<T, C>,
    initial: A,
    combine: F,
) -> Result<A>
where
    T: Clone,
    C: Clone,
    F: Fn(A, Element<T, C>) -> Fut,
    Fut: Future<Output = core::result::Result<A, E>>,
    E: Error + Send + Sync + 'static,
{
    let mut accumulator = initial;
    for element in elements {
        let index = element.index;
        accumulator = combine(accumulator, element).await.map_err(|error| {
            debug!("combine step at index {} failed: {}", index, error);
            error.into_element_error(index)
        })?;
    }
    Ok(accumulator)
}

/// Extension trait providing the accumulation family.
///
/// Folding is sequential by nature: each combine step starts only after the
/// previous one settled, left to right over the present slots, so there is no
/// parallel flavour. Holes are skipped without invoking the combine function.
pub trait AccumulateExt: Traversable
where
    Self::Item: Clone + Send + Sync + 'static,
    Self::Context: Clone + Send + 'static,
{
    /// Folds the present elements into a single value of the element type.
    ///
    /// With `Some(initial)` the accumulator starts at `initial` and every present
    /// element is combined into it. With `None` the first present element seeds
    /// the accumulator and combining starts at the next present slot; a sequence
    /// without present elements then settles `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordinal_core::Sequence;
    /// use ordinal_exec::AccumulateExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> ordinal_core::Result<()> {
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    ///
    /// let sum = sequence
    ///     .reduce(
    ///         |acc, element| async move { Ok::<_, std::io::Error>(acc + element.value) },
    ///         Some(10),
    ///     )
    ///     .await?;
    ///
    /// assert_eq!(sum, Some(16));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first failing combine step; later elements are never combined.
    fn reduce<F, Fut, E>(
        &self,
        combine: F,
        initial: Option<Self::Item>,
    ) -> impl Future<Output = Result<Option<Self::Item>>> + Send + 'static
    where
        F: Fn(Self::Item, Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<Self::Item, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Folds the present elements into an accumulator of any type, seeded with
    /// `initial`.
    ///
    /// # Errors
    ///
    /// Returns the first failing combine step; later elements are never combined.
    fn fold<A, F, Fut, E>(
        &self,
        initial: A,
        combine: F,
    ) -> impl Future<Output = Result<A>> + Send + 'static
    where
        A: Send + 'static,
        F: Fn(A, Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<A, E>> + Send + 'static,
        E: Error + Send + Sync + 'static;
}

impl<S> AccumulateExt for S
where
    S: Traversable,
    S::Item: Clone + Send + Sync + 'static,
    S::Context: Clone + Send + 'static,
{
    fn reduce<F, Fut, E>(
        &self,
        combine: F,
        initial: Option<Self::Item>,
    ) -> impl Future<Output = Result<Option<Self::Item>>> + Send + 'static
    where
        F: Fn(Self::Item, Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<Self::Item, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let mut elements = self.elements();
        async move {
            let seed = match initial {
                Some(initial) => initial,
                None => match elements.next() {
                    Some(first) => first.value,
                    None => return Ok(None),
                },
            };
            fold_elements(elements, seed, combine).await.map(Some)
        }
    }

    fn fold<A, F, Fut, E>(
        &self,
        initial: A,
        combine: F,
    ) -> impl Future<Output = Result<A>> + Send + 'static
    where
        A: Send + 'static,
        F: Fn(A, Element<Self::Item, Self::Context>) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<A, E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        fold_elements(self.elements(), initial, combine)
    }
}
