//! Generation over an existing finite collection.

use std::borrow::Cow;

use crate::generator::poll_with;
use crate::{Generator, GeneratorError, GeneratorState};

/// Yields the elements of a collection, in order, by value.
///
/// The source is either owned by the generator ([`owned`](Self::owned)) or
/// borrowed from the caller ([`borrowed`](Self::borrowed)); a borrowing
/// generator cannot outlive its source. Elements are cloned out of the
/// source so that [`reset`](Generator::reset) can replay them.
#[derive(Debug, Clone)]
pub struct CollectionGenerator<'a, T>
where
    T: Clone,
{
    items: Cow<'a, [T]>,
    /// Index of the next element to emit, at most `items.len()`.
    cursor: usize,
    state: GeneratorState,
}

impl<T: Clone> CollectionGenerator<'static, T> {
    /// Create a generator that takes ownership of `items`.
    ///
    /// Any ordered collection works; its elements are kept in iteration order.
    pub fn owned<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_source(Cow::Owned(items.into_iter().collect()))
    }
}

impl<'a, T: Clone> CollectionGenerator<'a, T> {
    /// Create a generator that reads from a slice owned by the caller.
    pub fn borrowed(items: &'a [T]) -> Self {
        Self::with_source(Cow::Borrowed(items))
    }

    fn with_source(items: Cow<'a, [T]>) -> Self {
        Self {
            items,
            cursor: 0,
            state: GeneratorState::Generating,
        }
    }

    /// Number of elements in the source.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements not yet emitted.
    ///
    /// A force-completed generator still reports what it skipped.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Whether the source is borrowed from the caller.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.items, Cow::Borrowed(_))
    }
}

impl<T: Clone> Generator for CollectionGenerator<'_, T> {
    type Item = T;

    fn try_next(&mut self) -> Result<Option<T>, GeneratorError> {
        poll_with(&mut self.state, || {
            let value = self.items.get(self.cursor)?.clone();
            self.cursor += 1;
            Some(value)
        })
    }

    fn reset(&mut self) {
        tracing::trace!(len = self.items.len(), "Resetting collection generator");
        self.cursor = 0;
        self.state = GeneratorState::Generating;
    }

    fn force_complete(&mut self) {
        tracing::trace!(
            remaining = self.remaining(),
            "Forcing collection generator to complete"
        );
        self.state = GeneratorState::Exhausted;
    }

    fn state(&self) -> GeneratorState {
        self.state
    }
}

impl<T: Clone> From<Vec<T>> for CollectionGenerator<'static, T> {
    fn from(items: Vec<T>) -> Self {
        Self::with_source(Cow::Owned(items))
    }
}

impl<'a, T: Clone> From<&'a [T]> for CollectionGenerator<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::borrowed(items)
    }
}
