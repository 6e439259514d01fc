//! Combinators that never change when their source terminates.
//!
//! `map` and `mapi` emit exactly one element per upstream element; `flat_map`
//! and `concat` stitch several upstream cursors into one; `append` adds a
//! single trailing element.

use std::convert::identity;
use std::iter::Once;

use crate::error::{Result, SequenceError};
use crate::sequence::{Cursor, IterCursor, LazySequence, Sequence};

// =============================================================================
// map
// =============================================================================

/// Cursor for [`map`].
///
/// The function runs inside `next`, never inside `has_next`.
#[derive(Debug)]
pub struct MapCursor<C, F> {
    upstream: C,
    function: F,
}

impl<C, B, F> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<B> {
        if !self.upstream.has_next()? {
            return Err(SequenceError::exhausted("map"));
        }
        self.upstream.next().map(&mut self.function)
    }
}

/// Lazily applies `function` to each element of `sequence`.
///
/// `function` is called exactly once per emitted element, in order, when
/// that element is consumed.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::map;
/// use lazyseq::sequence::to_vec;
///
/// let doubled = map(|x: i32| x * 2, [1, 2, 3, 4, 5]);
/// assert_eq!(to_vec(doubled).unwrap(), vec![2, 4, 6, 8, 10]);
/// ```
pub fn map<'a, S, B, F>(function: F, sequence: S) -> LazySequence<'a, MapCursor<S::Cursor, F>>
where
    S: Sequence + 'a,
    F: FnMut(S::Item) -> B + 'a,
{
    LazySequence::new("map", move || {
        Ok(MapCursor {
            upstream: sequence.create_cursor()?,
            function,
        })
    })
}

// =============================================================================
// mapi
// =============================================================================

/// Cursor for [`mapi`].
#[derive(Debug)]
pub struct MapIndexedCursor<C, F> {
    upstream: C,
    function: F,
    index: usize,
}

impl<C, B, F> Cursor for MapIndexedCursor<C, F>
where
    C: Cursor,
    F: FnMut(usize, C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<B> {
        if !self.upstream.has_next()? {
            return Err(SequenceError::exhausted("mapi"));
        }
        let element = self.upstream.next()?;
        let mapped = (self.function)(self.index, element);
        self.index += 1;
        Ok(mapped)
    }
}

/// Like [`map`], but `function` also receives the zero-based emission index.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::mapi;
/// use lazyseq::sequence::to_vec;
///
/// let labelled = mapi(|index, name: &str| format!("{index}:{name}"), ["a", "b"]);
/// assert_eq!(to_vec(labelled).unwrap(), vec!["0:a", "1:b"]);
/// ```
pub fn mapi<'a, S, B, F>(
    function: F,
    sequence: S,
) -> LazySequence<'a, MapIndexedCursor<S::Cursor, F>>
where
    S: Sequence + 'a,
    F: FnMut(usize, S::Item) -> B + 'a,
{
    LazySequence::new("mapi", move || {
        Ok(MapIndexedCursor {
            upstream: sequence.create_cursor()?,
            function,
            index: 0,
        })
    })
}

// =============================================================================
// flat_map / flatten
// =============================================================================

/// Cursor for [`flat_map`] and [`flatten`].
///
/// Holds at most one inner cursor at a time. A new outer element is pulled,
/// and `function` called on it, only once the current inner cursor runs dry.
pub struct FlatMapCursor<C, F, S: Sequence> {
    outer: C,
    function: F,
    inner: Option<S::Cursor>,
}

impl<C, F, S> Cursor for FlatMapCursor<C, F, S>
where
    C: Cursor,
    F: FnMut(C::Item) -> S,
    S: Sequence,
{
    type Item = S::Item;

    fn has_next(&mut self) -> Result<bool> {
        loop {
            if let Some(inner) = self.inner.as_mut()
                && inner.has_next()?
            {
                return Ok(true);
            }
            if !self.outer.has_next()? {
                self.inner = None;
                return Ok(false);
            }
            let inner_sequence = (self.function)(self.outer.next()?);
            self.inner = Some(inner_sequence.create_cursor()?);
        }
    }

    fn next(&mut self) -> Result<S::Item> {
        if !self.has_next()? {
            return Err(SequenceError::exhausted("flat_map"));
        }
        match self.inner.as_mut() {
            Some(inner) => inner.next(),
            None => Err(SequenceError::exhausted("flat_map")),
        }
    }
}

/// Maps each element to a sequence and traverses those sequences in turn.
///
/// `function` is called at most once per outer element, and only when the
/// previous inner sequence has been fully consumed.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::flat_map;
/// use lazyseq::sequence::to_vec;
///
/// let repeated = flat_map(|x: usize| vec![x; x], [1, 2, 3]);
/// assert_eq!(to_vec(repeated).unwrap(), vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<'a, S, T, F>(
    function: F,
    sequence: S,
) -> LazySequence<'a, FlatMapCursor<S::Cursor, F, T>>
where
    S: Sequence + 'a,
    T: Sequence,
    F: FnMut(S::Item) -> T + 'a,
{
    LazySequence::new("flat_map", move || {
        Ok(FlatMapCursor {
            outer: sequence.create_cursor()?,
            function,
            inner: None,
        })
    })
}

/// Traverses a sequence of sequences as one sequence.
pub fn flatten<'a, S>(
    sequence: S,
) -> LazySequence<'a, FlatMapCursor<S::Cursor, fn(S::Item) -> S::Item, S::Item>>
where
    S: Sequence + 'a,
    S::Item: Sequence,
{
    LazySequence::new("flatten", move || {
        Ok(FlatMapCursor {
            outer: sequence.create_cursor()?,
            function: identity as fn(S::Item) -> S::Item,
            inner: None,
        })
    })
}

// =============================================================================
// concat / append
// =============================================================================

/// Cursor for [`concat`] and [`append`].
#[derive(Debug)]
pub struct ConcatCursor<A, B> {
    first: A,
    second: B,
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn has_next(&mut self) -> Result<bool> {
        Ok(self.first.has_next()? || self.second.has_next()?)
    }

    fn next(&mut self) -> Result<A::Item> {
        if self.first.has_next()? {
            self.first.next()
        } else if self.second.has_next()? {
            self.second.next()
        } else {
            Err(SequenceError::exhausted("concat"))
        }
    }
}

/// Traverses `first`, then `second`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::concat;
/// use lazyseq::sequence::to_vec;
///
/// assert_eq!(to_vec(concat([1, 2], vec![3])).unwrap(), vec![1, 2, 3]);
/// ```
pub fn concat<'a, A, B>(first: A, second: B) -> LazySequence<'a, ConcatCursor<A::Cursor, B::Cursor>>
where
    A: Sequence + 'a,
    B: Sequence<Item = A::Item> + 'a,
{
    LazySequence::new("concat", move || {
        Ok(ConcatCursor {
            first: first.create_cursor()?,
            second: second.create_cursor()?,
        })
    })
}

/// Traverses `sequence`, then yields `value`.
///
/// Equivalent to `concat(sequence, singleton(value))`.
pub fn append<'a, S>(
    value: S::Item,
    sequence: S,
) -> LazySequence<'a, ConcatCursor<S::Cursor, IterCursor<Once<S::Item>>>>
where
    S: Sequence + 'a,
    S::Item: 'a,
{
    LazySequence::new("append", move || {
        Ok(ConcatCursor {
            first: sequence.create_cursor()?,
            second: IterCursor::new(std::iter::once(value)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{from_iter, to_vec};
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    fn test_map_calls_function_only_on_next() {
        let calls = Cell::new(0);
        let sequence = map(
            |x: i32| {
                calls.set(calls.get() + 1);
                x + 1
            },
            [1, 2],
        );
        let mut cursor = sequence.create_cursor().unwrap();

        assert!(cursor.has_next().unwrap());
        assert!(cursor.has_next().unwrap());
        assert_eq!(calls.get(), 0);

        assert_eq!(cursor.next().unwrap(), 2);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_map_exhausted_cursor_fails() {
        let mut cursor = map(|x: i32| x, [1]).create_cursor().unwrap();
        cursor.next().unwrap();
        assert_eq!(cursor.next(), Err(SequenceError::exhausted("map")));
    }

    #[rstest]
    fn test_mapi_indices_start_at_zero() {
        let pairs = mapi(|index, value: char| (index, value), ['x', 'y', 'z']);
        assert_eq!(
            to_vec(pairs).unwrap(),
            vec![(0, 'x'), (1, 'y'), (2, 'z')]
        );
    }

    #[rstest]
    fn test_flat_map_skips_empty_inner_sequences() {
        let sequence = flat_map(|x: usize| vec![x; x % 3], [0, 1, 2, 3, 4]);
        assert_eq!(to_vec(sequence).unwrap(), vec![1, 2, 2, 4]);
    }

    #[rstest]
    fn test_flat_map_calls_function_once_per_outer_element() {
        let calls = RefCell::new(Vec::new());
        let sequence = flat_map(
            |x: i32| {
                calls.borrow_mut().push(x);
                vec![x, x]
            },
            [1, 2, 3],
        );
        let mut cursor = sequence.create_cursor().unwrap();

        assert_eq!(cursor.next().unwrap(), 1);
        assert_eq!(*calls.borrow(), vec![1]);
        assert_eq!(cursor.next().unwrap(), 1);
        assert!(cursor.has_next().unwrap());
        assert_eq!(*calls.borrow(), vec![1, 2]);

        while cursor.has_next().unwrap() {
            cursor.next().unwrap();
        }
        assert_eq!(*calls.borrow(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_flat_map_propagates_inner_traversal_error() {
        let shared = from_iter(vec![1, 2]);
        let sequence = flat_map(|_: i32| &shared, [0, 0]);
        let mut cursor = sequence.create_cursor().unwrap();

        assert_eq!(cursor.next().unwrap(), 1);
        assert_eq!(cursor.next().unwrap(), 2);
        assert_eq!(
            cursor.has_next(),
            Err(SequenceError::multiple_traversal("from_iter"))
        );
    }

    #[rstest]
    fn test_flatten_joins_nested_sequences() {
        let nested = vec![vec![1], vec![], vec![2, 3]];
        assert_eq!(to_vec(flatten(nested)).unwrap(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(vec![], vec![], vec![])]
    #[case(vec![1], vec![], vec![1])]
    #[case(vec![], vec![2], vec![2])]
    #[case(vec![1, 2], vec![3, 4], vec![1, 2, 3, 4])]
    fn test_concat(#[case] first: Vec<i32>, #[case] second: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(to_vec(concat(first, second)).unwrap(), expected);
    }

    #[rstest]
    fn test_concat_exhausted_cursor_fails() {
        let mut cursor = concat([1], [2]).create_cursor().unwrap();
        cursor.next().unwrap();
        cursor.next().unwrap();
        assert!(!cursor.has_next().unwrap());
        assert_eq!(cursor.next(), Err(SequenceError::exhausted("concat")));
    }

    #[rstest]
    fn test_append_adds_trailing_element() {
        assert_eq!(to_vec(append(9, [1, 2])).unwrap(), vec![1, 2, 9]);
        assert_eq!(to_vec(append(9, Vec::<i32>::new())).unwrap(), vec![9]);
    }
}
