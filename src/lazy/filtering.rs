//! Combinators that decide which upstream elements to emit, and when to stop.
//!
//! `filter`, `choose` and `take_while` answer `has_next` by searching ahead
//! and parking the accepted element in a [`Lookahead`]. `skip` and `take`
//! only count. `skip_while` searches once, then passes through.

use crate::error::{Result, SequenceError};
use crate::option::OptionalResult;
use crate::sequence::{Cursor, LazySequence, Lookahead, Sequence};

// =============================================================================
// filter
// =============================================================================

/// Cursor for [`filter`].
pub struct FilterCursor<C: Cursor, P> {
    upstream: C,
    predicate: P,
    lookahead: Lookahead<C::Item>,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool> {
        let upstream = &mut self.upstream;
        let predicate = &mut self.predicate;
        self.lookahead.fill(|| {
            while upstream.has_next()? {
                let element = upstream.next()?;
                if predicate(&element) {
                    return Ok(Some(element));
                }
            }
            Ok(None)
        })
    }

    fn next(&mut self) -> Result<C::Item> {
        self.has_next()?;
        self.lookahead
            .take()
            .ok_or(SequenceError::exhausted("filter"))
    }
}

/// Lazily keeps the elements of `sequence` for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::filter;
/// use lazyseq::sequence::to_vec;
///
/// let even = filter(|x: &i32| x % 2 == 0, [1, 2, 3, 4, 5, 6]);
/// assert_eq!(to_vec(even).unwrap(), vec![2, 4, 6]);
/// ```
pub fn filter<'a, S, P>(predicate: P, sequence: S) -> LazySequence<'a, FilterCursor<S::Cursor, P>>
where
    S: Sequence + 'a,
    P: FnMut(&S::Item) -> bool + 'a,
{
    LazySequence::new("filter", move || {
        Ok(FilterCursor {
            upstream: sequence.create_cursor()?,
            predicate,
            lookahead: Lookahead::new(),
        })
    })
}

// =============================================================================
// choose
// =============================================================================

/// Cursor for [`choose`].
pub struct ChooseCursor<C, F, O: OptionalResult> {
    upstream: C,
    function: F,
    lookahead: Lookahead<O::Value>,
}

impl<C, F, O> Cursor for ChooseCursor<C, F, O>
where
    C: Cursor,
    F: FnMut(C::Item) -> O,
    O: OptionalResult,
{
    type Item = O::Value;

    fn has_next(&mut self) -> Result<bool> {
        let upstream = &mut self.upstream;
        let function = &mut self.function;
        self.lookahead.fill(|| {
            while upstream.has_next()? {
                let outcome = function(upstream.next()?);
                if outcome.is_present() {
                    return outcome.get().map(Some);
                }
            }
            Ok(None)
        })
    }

    fn next(&mut self) -> Result<O::Value> {
        self.has_next()?;
        self.lookahead
            .take()
            .ok_or(SequenceError::exhausted("choose"))
    }
}

/// Filters and transforms in one step.
///
/// Each element is passed to `function`; a present result is emitted, an
/// absent one is skipped.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::choose;
/// use lazyseq::sequence::to_vec;
///
/// let parsed = choose(|text: &str| text.parse::<i32>().ok(), ["1", "x", "3"]);
/// assert_eq!(to_vec(parsed).unwrap(), vec![1, 3]);
/// ```
pub fn choose<'a, S, O, F>(
    function: F,
    sequence: S,
) -> LazySequence<'a, ChooseCursor<S::Cursor, F, O>>
where
    S: Sequence + 'a,
    O: OptionalResult,
    F: FnMut(S::Item) -> O + 'a,
{
    LazySequence::new("choose", move || {
        Ok(ChooseCursor {
            upstream: sequence.create_cursor()?,
            function,
            lookahead: Lookahead::new(),
        })
    })
}

// =============================================================================
// skip
// =============================================================================

/// Cursor for [`skip`].
#[derive(Debug)]
pub struct SkipCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> SkipCursor<C> {
    fn skip_pending(&mut self) -> Result<()> {
        while self.remaining > 0 {
            if !self.upstream.has_next()? {
                self.remaining = 0;
                break;
            }
            self.upstream.next()?;
            self.remaining -= 1;
        }
        Ok(())
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool> {
        self.skip_pending()?;
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next()? {
            return Err(SequenceError::exhausted("skip"));
        }
        self.upstream.next()
    }
}

/// Drops the first `count` elements of `sequence`.
///
/// The skipping happens on the first `has_next` or `next`, not when the
/// cursor is created. A source shorter than `count` yields an empty
/// sequence rather than an error.
pub fn skip<'a, S>(count: usize, sequence: S) -> LazySequence<'a, SkipCursor<S::Cursor>>
where
    S: Sequence + 'a,
{
    LazySequence::new("skip", move || {
        Ok(SkipCursor {
            upstream: sequence.create_cursor()?,
            remaining: count,
        })
    })
}

// =============================================================================
// skip_while
// =============================================================================

/// Cursor for [`skip_while`].
pub struct SkipWhileCursor<C: Cursor, P> {
    upstream: C,
    predicate: P,
    skipping: bool,
    pending: Option<C::Item>,
}

impl<C, P> Cursor for SkipWhileCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        if self.skipping {
            while self.upstream.has_next()? {
                let element = self.upstream.next()?;
                if !(self.predicate)(&element) {
                    self.skipping = false;
                    self.pending = Some(element);
                    return Ok(true);
                }
            }
            self.skipping = false;
            return Ok(false);
        }
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next()? {
            return Err(SequenceError::exhausted("skip_while"));
        }
        match self.pending.take() {
            Some(element) => Ok(element),
            None => self.upstream.next(),
        }
    }
}

/// Drops elements while `predicate` holds, then emits everything after.
///
/// The first element failing `predicate` is the first element emitted. If
/// `predicate` holds for every element the result is empty.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::skip_while;
/// use lazyseq::sequence::to_vec;
///
/// let rest = skip_while(|x: &i32| *x < 3, [1, 2, 3, 1, 2]);
/// assert_eq!(to_vec(rest).unwrap(), vec![3, 1, 2]);
/// ```
pub fn skip_while<'a, S, P>(
    predicate: P,
    sequence: S,
) -> LazySequence<'a, SkipWhileCursor<S::Cursor, P>>
where
    S: Sequence + 'a,
    P: FnMut(&S::Item) -> bool + 'a,
{
    LazySequence::new("skip_while", move || {
        Ok(SkipWhileCursor {
            upstream: sequence.create_cursor()?,
            predicate,
            skipping: true,
            pending: None,
        })
    })
}

// =============================================================================
// take
// =============================================================================

/// Cursor for [`take`].
#[derive(Debug)]
pub struct TakeCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool> {
        if self.remaining == 0 {
            return Ok(false);
        }
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next()? {
            return Err(SequenceError::exhausted("take"));
        }
        self.remaining -= 1;
        self.upstream.next()
    }
}

/// Emits at most `count` elements of `sequence`.
///
/// Unlike `eager::take`, asking for more elements
/// than the source holds is not an error: the result is simply shorter.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::{init, take};
/// use lazyseq::sequence::count;
///
/// let ten = init(|x| x * 2, 10).unwrap();
/// assert_eq!(count(take(100, ten)).unwrap(), 10);
/// ```
pub fn take<'a, S>(count: usize, sequence: S) -> LazySequence<'a, TakeCursor<S::Cursor>>
where
    S: Sequence + 'a,
{
    LazySequence::new("take", move || {
        Ok(TakeCursor {
            upstream: sequence.create_cursor()?,
            remaining: count,
        })
    })
}

// =============================================================================
// take_while
// =============================================================================

/// Cursor for [`take_while`].
pub struct TakeWhileCursor<C: Cursor, P> {
    upstream: C,
    predicate: P,
    lookahead: Lookahead<C::Item>,
}

impl<C, P> Cursor for TakeWhileCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool> {
        let upstream = &mut self.upstream;
        let predicate = &mut self.predicate;
        self.lookahead.fill(|| {
            if !upstream.has_next()? {
                return Ok(None);
            }
            let element = upstream.next()?;
            Ok(predicate(&element).then_some(element))
        })
    }

    fn next(&mut self) -> Result<C::Item> {
        self.has_next()?;
        self.lookahead
            .take()
            .ok_or(SequenceError::exhausted("take_while"))
    }
}

/// Emits elements while `predicate` holds.
///
/// The first element failing `predicate` is discarded and ends the sequence
/// for good; it is never tested again.
pub fn take_while<'a, S, P>(
    predicate: P,
    sequence: S,
) -> LazySequence<'a, TakeWhileCursor<S::Cursor, P>>
where
    S: Sequence + 'a,
    P: FnMut(&S::Item) -> bool + 'a,
{
    LazySequence::new("take_while", move || {
        Ok(TakeWhileCursor {
            upstream: sequence.create_cursor()?,
            predicate,
            lookahead: Lookahead::new(),
        })
    })
}
