// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordered, possibly sparse, immutable sequences.

use crate::traversable::WithContext;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// An ordered collection of slots, each either present or a hole.
///
/// Slots are shared behind an `Arc` and never mutated, so cloning a `Sequence`
/// is cheap and every element function observes the same input. Holes keep
/// their index position: the element after a hole still reports its original
/// slot index.
///
/// # Example
///
/// ```
/// use ordinal_core::Sequence;
///
/// let sparse = Sequence::from_slots(vec![Some(1), None, Some(3)]);
/// assert_eq!(sparse.len(), 3);
/// assert_eq!(sparse.present_len(), 2);
/// assert!(!sparse.is_present(1));
///
/// let present: Vec<_> = sparse.present().collect();
/// assert_eq!(present, vec![(0, &1), (2, &3)]);
/// ```
pub struct Sequence<T> {
    slots: Arc<[Option<T>]>,
}

impl<T> Sequence<T> {
    /// A sequence with no slots.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: Arc::from(Vec::new()),
        }
    }

    /// Build a sequence from explicit slots, `None` marking a hole.
    #[must_use]
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Self {
            slots: Arc::from(slots),
        }
    }

    /// Build a sequence of `len` slots where only the given entries are present.
    ///
    /// Entries with an index outside `0..len` are ignored; a repeated index keeps
    /// the last value.
    ///
    /// ```
    /// use ordinal_core::Sequence;
    ///
    /// let seq = Sequence::sparse(4, [(1, "b"), (3, "d")]);
    /// assert_eq!(seq.get(1), Some(&"b"));
    /// assert_eq!(seq.get(2), None);
    /// ```
    pub fn sparse(len: usize, entries: impl IntoIterator<Item = (usize, T)>) -> Self {
        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(len).collect();
        for (index, value) in entries {
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(value);
            }
        }
        Self::from_slots(slots)
    }

    /// Number of slots, holes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence has no slots at all, holes included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of present slots.
    #[must_use]
    pub fn present_len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The value at `index`, or `None` for a hole or an out-of-range index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Whether slot `index` holds a value. Out-of-range indices are not present.
    #[must_use]
    pub fn is_present(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// All slots in index order, holes as `None`.
    #[must_use]
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Iterate the present slots in index order as `(index, value)` pairs.
    pub fn present(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    /// Bind an invocation context handed to every element function.
    pub fn with_context<C>(&self, context: C) -> WithContext<T, C> {
        WithContext::new(self.clone(), context)
    }

    /// Bind `context`, falling back to `C::default()` when none is given.
    pub fn with_context_or_default<C: Default>(&self, context: Option<C>) -> WithContext<T, C> {
        self.with_context(context.unwrap_or_default())
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}
