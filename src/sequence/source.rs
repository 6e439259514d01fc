//! Leaf sources: containers, iterators, and the trivial sequences.

use std::iter::{Empty, Once};

use super::lookahead::Lookahead;
use super::{Cursor, LazySequence, Sequence};
use crate::error::{Result, SequenceError};

/// A cursor over any [`Iterator`].
///
/// `has_next` pulls one element ahead and holds it, so the wrapped iterator
/// is advanced at most one element beyond what has been consumed. Once the
/// iterator returns `None` it is never polled again.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Cursor, IterCursor};
///
/// let mut cursor = IterCursor::new(vec!["a", "b"]);
/// assert_eq!(cursor.next().unwrap(), "a");
/// assert_eq!(cursor.next().unwrap(), "b");
/// assert!(!cursor.has_next().unwrap());
/// assert!(cursor.next().is_err());
/// ```
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    iterator: I,
    lookahead: Lookahead<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Creates a cursor over the iterator produced by `iterable`.
    pub fn new<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iterator: iterable.into_iter(),
            lookahead: Lookahead::new(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> Result<bool> {
        let iterator = &mut self.iterator;
        self.lookahead.fill(|| Ok(iterator.next()))
    }

    fn next(&mut self) -> Result<Self::Item> {
        self.has_next()?;
        self.lookahead
            .take()
            .ok_or(SequenceError::exhausted("iterator"))
    }
}

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Cursor = IterCursor<std::vec::IntoIter<T>>;

    fn create_cursor(&self) -> Result<Self::Cursor> {
        Ok(IterCursor::new(self.to_vec()))
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor = IterCursor<std::vec::IntoIter<T>>;

    fn create_cursor(&self) -> Result<Self::Cursor> {
        self.as_slice().create_cursor()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Cursor = IterCursor<std::vec::IntoIter<T>>;

    fn create_cursor(&self) -> Result<Self::Cursor> {
        self.as_slice().create_cursor()
    }
}

/// Wraps any `IntoIterator` as a one-shot lazy sequence.
///
/// `into_iter` is not called until the cursor is created.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{from_iter, to_vec};
///
/// let sequence = from_iter((1..).step_by(3).take(4));
/// assert_eq!(to_vec(&sequence).unwrap(), vec![1, 4, 7, 10]);
/// ```
pub fn from_iter<'a, T>(iterable: T) -> LazySequence<'a, IterCursor<T::IntoIter>>
where
    T: IntoIterator + 'a,
{
    LazySequence::new("from_iter", move || Ok(IterCursor::new(iterable)))
}

/// A one-shot sequence with no elements.
pub fn empty<'a, T: 'a>() -> LazySequence<'a, IterCursor<Empty<T>>> {
    LazySequence::new("empty", || Ok(IterCursor::new(std::iter::empty())))
}

/// A one-shot sequence holding exactly `value`.
pub fn singleton<'a, T: 'a>(value: T) -> LazySequence<'a, IterCursor<Once<T>>> {
    LazySequence::new("singleton", move || Ok(IterCursor::new(std::iter::once(value))))
}
