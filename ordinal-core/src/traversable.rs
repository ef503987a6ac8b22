// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::sequence::Sequence;

/// The argument handed to an element function for one present slot.
///
/// `value` is a clone of the slot value and `index` its original slot index,
/// unaffected by holes before it. `sequence` is the whole input and `context`
/// the invocation context bound with [`Sequence::with_context`] (`()` when none
/// was bound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<T, C = ()> {
    pub value: T,
    pub index: usize,
    pub sequence: Sequence<T>,
    pub context: C,
}

impl<T, C> Element<T, C> {
    /// Splits the element into its value and index, dropping the rest.
    pub fn into_parts(self) -> (T, usize) {
        (self.value, self.index)
    }
}

/// Something the traversal families can run over: a sequence plus the context
/// bound to each element function invocation.
///
/// Implemented by [`Sequence`] (with the unit context) and [`WithContext`].
pub trait Traversable {
    type Item;
    type Context;

    fn sequence(&self) -> &Sequence<Self::Item>;

    fn context(&self) -> &Self::Context;

    /// An owned copy of the sequence and context, for futures that outlive `self`.
    fn to_bound(&self) -> WithContext<Self::Item, Self::Context>
    where
        Self::Context: Clone,
    {
        WithContext::new(self.sequence().clone(), self.context().clone())
    }

    /// Owned elements for every present slot, in index order.
    fn elements(&self) -> Elements<Self::Item, Self::Context>
    where
        Self::Item: Clone,
        Self::Context: Clone,
    {
        Elements::new(self.sequence().clone(), self.context().clone())
    }
}

impl<T> Traversable for Sequence<T> {
    type Item = T;
    type Context = ();

    fn sequence(&self) -> &Sequence<T> {
        self
    }

    fn context(&self) -> &() {
        &()
    }
}

/// A sequence with an explicit invocation context bound to it.
///
/// # Example
///
/// ```
/// use ordinal_core::{Sequence, Traversable};
///
/// let bound = Sequence::from(vec![1, 2]).with_context("audit");
/// let contexts: Vec<_> = bound.elements().map(|element| element.context).collect();
/// assert_eq!(contexts, vec!["audit", "audit"]);
/// ```
#[derive(Debug, Clone)]
pub struct WithContext<T, C> {
    sequence: Sequence<T>,
    context: C,
}

impl<T, C> WithContext<T, C> {
    pub fn new(sequence: Sequence<T>, context: C) -> Self {
        Self { sequence, context }
    }

    pub fn into_inner(self) -> (Sequence<T>, C) {
        (self.sequence, self.context)
    }
}

impl<T, C> Traversable for WithContext<T, C> {
    type Item = T;
    type Context = C;

    fn sequence(&self) -> &Sequence<T> {
        &self.sequence
    }

    fn context(&self) -> &C {
        &self.context
    }
}

/// Iterator over the present slots of a sequence as owned [`Element`]s.
///
/// Holes are skipped without shifting the reported indices.
#[derive(Debug, Clone)]
pub struct Elements<T, C> {
    sequence: Sequence<T>,
    context: C,
    cursor: usize,
}

impl<T, C> Elements<T, C> {
    pub fn new(sequence: Sequence<T>, context: C) -> Self {
        Self {
            sequence,
            context,
            cursor: 0,
        }
    }
}

impl<T: Clone, C: Clone> Iterator for Elements<T, C> {
    type Item = Element<T, C>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.sequence.len() {
            let index = self.cursor;
            self.cursor += 1;
            if let Some(value) = self.sequence.get(index) {
                return Some(Element {
                    value: value.clone(),
                    index,
                    sequence: self.sequence.clone(),
                    context: self.context.clone(),
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.sequence.len().saturating_sub(self.cursor)))
    }
}
