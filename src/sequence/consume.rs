//! Terminal operations and the bridge back to `std::iter`.
//!
//! Each operation here spends the sequence's one cursor and drives it to
//! the end (or to the first error).

use std::iter::FusedIterator;

use super::{Cursor, Sequence};
use crate::error::Result;

/// Adapts a [`Cursor`] into an [`Iterator`] of `Result`s.
///
/// Yields `Ok(element)` for each element, then `None` once the cursor is
/// exhausted. If the cursor raises an error, that error is yielded once and
/// the iterator is fused afterwards.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{CursorIter, Sequence};
///
/// let cursor = [1, 2, 3].create_cursor().unwrap();
/// let doubled: Result<Vec<i32>, _> = CursorIter::new(cursor).map(|x| x.map(|v| v * 2)).collect();
/// assert_eq!(doubled.unwrap(), vec![2, 4, 6]);
/// ```
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: Option<C>,
}

impl<C: Cursor> CursorIter<C> {
    /// Wraps `cursor`.
    #[inline]
    pub const fn new(cursor: C) -> Self {
        Self {
            cursor: Some(cursor),
        }
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let step = match cursor.has_next() {
            Ok(true) => cursor.next(),
            Ok(false) => {
                self.cursor = None;
                return None;
            }
            Err(error) => Err(error),
        };
        if step.is_err() {
            self.cursor = None;
        }
        Some(step)
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}

/// Collects every element of `sequence` into a `Vec`.
///
/// # Errors
///
/// Returns the first error raised while creating or driving the cursor.
pub fn to_vec<S: Sequence>(sequence: S) -> Result<Vec<S::Item>> {
    fold(sequence, Vec::new(), |mut collected, element| {
        collected.push(element);
        collected
    })
}

/// Left-folds every element of `sequence` into an accumulator.
///
/// # Errors
///
/// Returns the first error raised while creating or driving the cursor.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::fold;
///
/// let sum = fold([1, 2, 3, 4], 0, |accumulator, element| accumulator + element).unwrap();
/// assert_eq!(sum, 10);
/// ```
pub fn fold<S, B, F>(sequence: S, initial: B, mut function: F) -> Result<B>
where
    S: Sequence,
    F: FnMut(B, S::Item) -> B,
{
    let mut cursor = sequence.create_cursor()?;
    let mut accumulator = initial;
    while cursor.has_next()? {
        accumulator = function(accumulator, cursor.next()?);
    }
    Ok(accumulator)
}

/// Calls `action` on every element of `sequence`, in order.
///
/// # Errors
///
/// Returns the first error raised while creating or driving the cursor.
pub fn for_each<S, F>(sequence: S, mut action: F) -> Result<()>
where
    S: Sequence,
    F: FnMut(S::Item),
{
    fold(sequence, (), |(), element| action(element))
}

/// Counts the elements of `sequence`.
///
/// # Errors
///
/// Returns the first error raised while creating or driving the cursor.
pub fn count<S: Sequence>(sequence: S) -> Result<usize> {
    fold(sequence, 0, |total, _| total + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequenceError;
    use crate::sequence::{IterCursor, from_iter};
    use rstest::rstest;

    struct FailingCursor {
        remaining: usize,
    }

    impl Cursor for FailingCursor {
        type Item = usize;

        fn has_next(&mut self) -> Result<bool> {
            if self.remaining == 0 {
                Err(SequenceError::uneven_length("test", 2))
            } else {
                Ok(true)
            }
        }

        fn next(&mut self) -> Result<usize> {
            self.has_next()?;
            self.remaining -= 1;
            Ok(self.remaining)
        }
    }

    #[rstest]
    fn test_cursor_iter_yields_elements_then_none() {
        let collected: Vec<_> = CursorIter::new(IterCursor::new(vec![1, 2])).collect();
        assert_eq!(collected, vec![Ok(1), Ok(2)]);
    }

    #[rstest]
    fn test_cursor_iter_fuses_after_error() {
        let mut iterator = CursorIter::new(FailingCursor { remaining: 2 });
        assert_eq!(iterator.next(), Some(Ok(1)));
        assert_eq!(iterator.next(), Some(Ok(0)));
        assert_eq!(
            iterator.next(),
            Some(Err(SequenceError::uneven_length("test", 2)))
        );
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_to_vec_collects_in_order() {
        assert_eq!(to_vec(vec!['a', 'b', 'c']).unwrap(), vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn test_to_vec_spends_one_shot_sequence() {
        let sequence = from_iter(0..3);
        assert_eq!(to_vec(&sequence).unwrap(), vec![0, 1, 2]);
        assert_eq!(
            to_vec(&sequence),
            Err(SequenceError::multiple_traversal("from_iter"))
        );
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1], 1)]
    #[case(vec![1, 2, 3, 4], 4)]
    fn test_count(#[case] source: Vec<i32>, #[case] expected: usize) {
        assert_eq!(count(source).unwrap(), expected);
    }

    #[rstest]
    fn test_for_each_visits_in_order() {
        let mut visited = Vec::new();
        for_each([3, 1, 2], |element| visited.push(element)).unwrap();
        assert_eq!(visited, vec![3, 1, 2]);
    }
}
