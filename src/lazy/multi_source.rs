//! Convolution: combining sources position by position.
//!
//! `zip` and `zip3` require their sources to have the same length. Sources
//! are lazy, so a mismatch is only discovered when one of them runs out
//! before the others; the cursor fails at that position with
//! [`SequenceError::UnevenLength`] instead of truncating.

use crate::error::{Result, SequenceError};
use crate::sequence::{Cursor, LazySequence, Sequence};

// =============================================================================
// zip
// =============================================================================

/// Cursor for [`zip`].
#[derive(Debug)]
pub struct ZipCursor<A, B> {
    first: A,
    second: B,
    position: usize,
}

impl<A: Cursor, B: Cursor> Cursor for ZipCursor<A, B> {
    type Item = (A::Item, B::Item);

    fn has_next(&mut self) -> Result<bool> {
        let first = self.first.has_next()?;
        let second = self.second.has_next()?;
        if first != second {
            debug!("zip: sources diverged at position {}", self.position);
            return Err(SequenceError::uneven_length("zip", self.position));
        }
        Ok(first)
    }

    fn next(&mut self) -> Result<Self::Item> {
        if !self.has_next()? {
            return Err(SequenceError::exhausted("zip"));
        }
        let pair = (self.first.next()?, self.second.next()?);
        self.position += 1;
        Ok(pair)
    }
}

/// Pairs up the elements of two equally long sequences.
///
/// # Examples
///
/// ```rust
/// use lazyseq::SequenceError;
/// use lazyseq::lazy::zip;
/// use lazyseq::sequence::to_vec;
///
/// assert_eq!(to_vec(zip([1, 2], ['a', 'b'])).unwrap(), vec![(1, 'a'), (2, 'b')]);
/// assert_eq!(
///     to_vec(zip([1, 2, 3], ['a', 'b'])),
///     Err(SequenceError::uneven_length("zip", 2))
/// );
/// ```
pub fn zip<'a, A, B>(first: A, second: B) -> LazySequence<'a, ZipCursor<A::Cursor, B::Cursor>>
where
    A: Sequence + 'a,
    B: Sequence + 'a,
{
    LazySequence::new("zip", move || {
        Ok(ZipCursor {
            first: first.create_cursor()?,
            second: second.create_cursor()?,
            position: 0,
        })
    })
}

// =============================================================================
// zip3
// =============================================================================

/// Cursor for [`zip3`].
#[derive(Debug)]
pub struct Zip3Cursor<A, B, C> {
    first: A,
    second: B,
    third: C,
    position: usize,
}

impl<A: Cursor, B: Cursor, C: Cursor> Cursor for Zip3Cursor<A, B, C> {
    type Item = (A::Item, B::Item, C::Item);

    fn has_next(&mut self) -> Result<bool> {
        let first = self.first.has_next()?;
        let second = self.second.has_next()?;
        let third = self.third.has_next()?;
        if first != second || second != third {
            debug!("zip3: sources diverged at position {}", self.position);
            return Err(SequenceError::uneven_length("zip3", self.position));
        }
        Ok(first)
    }

    fn next(&mut self) -> Result<Self::Item> {
        if !self.has_next()? {
            return Err(SequenceError::exhausted("zip3"));
        }
        let triple = (self.first.next()?, self.second.next()?, self.third.next()?);
        self.position += 1;
        Ok(triple)
    }
}

/// Combines three equally long sequences into triples.
pub fn zip3<'a, A, B, C>(
    first: A,
    second: B,
    third: C,
) -> LazySequence<'a, Zip3Cursor<A::Cursor, B::Cursor, C::Cursor>>
where
    A: Sequence + 'a,
    B: Sequence + 'a,
    C: Sequence + 'a,
{
    LazySequence::new("zip3", move || {
        Ok(Zip3Cursor {
            first: first.create_cursor()?,
            second: second.create_cursor()?,
            third: third.create_cursor()?,
            position: 0,
        })
    })
}

// =============================================================================
// zip_functions
// =============================================================================

/// Cursor for [`zip_functions`].
#[derive(Debug)]
pub struct ZipFunctionsCursor<C, F, G> {
    upstream: C,
    first: F,
    second: G,
}

impl<C, F, G, X, Y> Cursor for ZipFunctionsCursor<C, F, G>
where
    C: Cursor,
    F: FnMut(&C::Item) -> X,
    G: FnMut(&C::Item) -> Y,
{
    type Item = (X, Y);

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<(X, Y)> {
        if !self.upstream.has_next()? {
            return Err(SequenceError::exhausted("zip_functions"));
        }
        let element = self.upstream.next()?;
        Ok(((self.first)(&element), (self.second)(&element)))
    }
}

/// Applies two functions to every element and pairs the results.
///
/// There is a single source, so lengths cannot disagree.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::zip_functions;
/// use lazyseq::sequence::to_vec;
///
/// let pairs = zip_functions(|x: &i32| x + 1, |x: &i32| x * 10, [1, 2]);
/// assert_eq!(to_vec(pairs).unwrap(), vec![(2, 10), (3, 20)]);
/// ```
pub fn zip_functions<'a, S, X, Y, F, G>(
    first: F,
    second: G,
    sequence: S,
) -> LazySequence<'a, ZipFunctionsCursor<S::Cursor, F, G>>
where
    S: Sequence + 'a,
    F: FnMut(&S::Item) -> X + 'a,
    G: FnMut(&S::Item) -> Y + 'a,
{
    LazySequence::new("zip_functions", move || {
        Ok(ZipFunctionsCursor {
            upstream: sequence.create_cursor()?,
            first,
            second,
        })
    })
}
