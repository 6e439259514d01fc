//! Combinators that produce elements from a function rather than a source.

use std::mem;

use crate::error::{Result, SequenceError};
use crate::option::OptionalResult;
use crate::sequence::{Cursor, LazySequence};

// =============================================================================
// init
// =============================================================================

/// Cursor for [`init`] and [`init_infinite`].
///
/// Counts from 1. `limit` is `None` for the unbounded form.
#[derive(Debug)]
pub struct InitCursor<F> {
    function: F,
    counter: usize,
    limit: Option<usize>,
}

impl<T, F> Cursor for InitCursor<F>
where
    F: FnMut(usize) -> T,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        Ok(self.limit.is_none_or(|limit| self.counter <= limit))
    }

    fn next(&mut self) -> Result<T> {
        if !self.has_next()? {
            return Err(SequenceError::exhausted("init"));
        }
        let value = (self.function)(self.counter);
        self.counter += 1;
        Ok(value)
    }
}

/// A sequence of `count` elements, the `n`-th being `function(n)` for
/// `n` in `1..=count`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] immediately if `count` is 0.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::init;
/// use lazyseq::sequence::to_vec;
///
/// let squares = init(|n| n * n, 4).unwrap();
/// assert_eq!(to_vec(squares).unwrap(), vec![1, 4, 9, 16]);
///
/// assert!(init(|n| n, 0).is_err());
/// ```
pub fn init<'a, T, F>(function: F, count: usize) -> Result<LazySequence<'a, InitCursor<F>>>
where
    F: FnMut(usize) -> T + 'a,
{
    if count < 1 {
        debug!("init: rejected count {count}");
        return Err(SequenceError::invalid_argument(
            "init",
            format!("count must be at least 1, got {count}"),
        ));
    }
    Ok(LazySequence::new("init", move || {
        Ok(InitCursor {
            function,
            counter: 1,
            limit: Some(count),
        })
    }))
}

/// An unbounded sequence whose `n`-th element is `function(n)`, counting
/// from 1.
///
/// Pair with [`take`](super::take) or [`take_while`](super::take_while) to
/// consume a finite prefix.
pub fn init_infinite<'a, T, F>(function: F) -> LazySequence<'a, InitCursor<F>>
where
    F: FnMut(usize) -> T + 'a,
{
    LazySequence::new("init_infinite", move || {
        Ok(InitCursor {
            function,
            counter: 1,
            limit: None,
        })
    })
}

// =============================================================================
// unfold
// =============================================================================

/// Cursor for [`unfold`].
#[derive(Debug)]
pub struct UnfoldCursor<S, F, P> {
    state: Option<S>,
    step: F,
    is_finished: P,
}

impl<S, T, F, P> Cursor for UnfoldCursor<S, F, P>
where
    F: FnMut(S) -> (T, S),
    P: FnMut(&S) -> bool,
{
    type Item = T;

    fn has_next(&mut self) -> Result<bool> {
        match self.state.as_ref() {
            Some(state) => Ok(!(self.is_finished)(state)),
            None => Ok(false),
        }
    }

    fn next(&mut self) -> Result<T> {
        if !self.has_next()? {
            return Err(SequenceError::exhausted("unfold"));
        }
        let state = self
            .state
            .take()
            .ok_or(SequenceError::exhausted("unfold"))?;
        let (value, next_state) = (self.step)(state);
        self.state = Some(next_state);
        Ok(value)
    }
}

/// Generates a sequence by threading a state through `step` until
/// `is_finished` reports the state as terminal.
///
/// `is_finished` is checked before every element; `step` turns the current
/// state into the emitted value and the next state.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::unfold;
/// use lazyseq::sequence::to_vec;
///
/// let evens = unfold(|n: i32| (n * 2, n + 1), |n: &i32| *n > 10, 1);
/// assert_eq!(to_vec(evens).unwrap(), vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
/// ```
pub fn unfold<'a, S, T, F, P>(
    step: F,
    is_finished: P,
    seed: S,
) -> LazySequence<'a, UnfoldCursor<S, F, P>>
where
    S: 'a,
    F: FnMut(S) -> (T, S) + 'a,
    P: FnMut(&S) -> bool + 'a,
{
    LazySequence::new("unfold", move || {
        Ok(UnfoldCursor {
            state: Some(seed),
            step,
            is_finished,
        })
    })
}

// =============================================================================
// unfold_option
// =============================================================================

/// Generation state for [`UnfoldOptionCursor`].
#[derive(Debug)]
enum Generation<S, T> {
    /// `step` has not yet been run on this state.
    Seeded(S),
    /// `step` produced a value that has not been consumed.
    Ready(T, S),
    /// `step` reported the end, or panicked mid-step.
    Finished,
}

/// Cursor for [`unfold_option`].
///
/// The only way to learn whether another element exists is to run `step`,
/// so `has_next` runs it and holds the result until `next`.
#[derive(Debug)]
pub struct UnfoldOptionCursor<S, T, F> {
    generation: Generation<S, T>,
    step: F,
}

impl<S, T, F, O> Cursor for UnfoldOptionCursor<S, T, F>
where
    F: FnMut(S) -> O,
    O: OptionalResult<Value = (T, S)>,
{
    type Item = T;

    fn has_next(&mut self) -> Result<bool> {
        match mem::replace(&mut self.generation, Generation::Finished) {
            Generation::Seeded(state) => {
                let outcome = (self.step)(state);
                if !outcome.is_present() {
                    return Ok(false);
                }
                let (value, next_state) = outcome.get()?;
                self.generation = Generation::Ready(value, next_state);
                Ok(true)
            }
            ready @ Generation::Ready(..) => {
                self.generation = ready;
                Ok(true)
            }
            Generation::Finished => Ok(false),
        }
    }

    fn next(&mut self) -> Result<T> {
        self.has_next()?;
        match mem::replace(&mut self.generation, Generation::Finished) {
            Generation::Ready(value, next_state) => {
                self.generation = Generation::Seeded(next_state);
                Ok(value)
            }
            other => {
                self.generation = other;
                Err(SequenceError::exhausted("unfold_option"))
            }
        }
    }
}

/// Generates a sequence from a `step` that signals its own end.
///
/// `step` returns a present `(value, next_state)` to emit `value` and
/// continue, or absent to end the sequence.
///
/// # Examples
///
/// ```rust
/// use lazyseq::lazy::unfold_option;
/// use lazyseq::sequence::to_vec;
///
/// let evens = unfold_option(|n: i32| (n <= 10).then(|| (n * 2, n + 1)), 1);
/// assert_eq!(to_vec(evens).unwrap(), vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
/// ```
pub fn unfold_option<'a, S, T, O, F>(
    step: F,
    seed: S,
) -> LazySequence<'a, UnfoldOptionCursor<S, T, F>>
where
    S: 'a,
    T: 'a,
    O: OptionalResult<Value = (T, S)>,
    F: FnMut(S) -> O + 'a,
{
    LazySequence::new("unfold_option", move || {
        Ok(UnfoldOptionCursor {
            generation: Generation::Seeded(seed),
            step,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::take;
    use crate::sequence::{Sequence, to_vec};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(1, vec![2])]
    #[case(3, vec![2, 4, 6])]
    fn test_init_bounded(#[case] count: usize, #[case] expected: Vec<usize>) {
        assert_eq!(to_vec(init(|n| n * 2, count).unwrap()).unwrap(), expected);
    }

    #[rstest]
    fn test_init_zero_count_fails_at_construction() {
        let calls = Cell::new(0);
        let result = init(
            |n| {
                calls.set(calls.get() + 1);
                n
            },
            0,
        );
        assert!(matches!(
            result,
            Err(SequenceError::InvalidArgument {
                combinator: "init",
                ..
            })
        ));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_init_exhausted_cursor_fails() {
        let mut cursor = init(|n| n, 1).unwrap().create_cursor().unwrap();
        assert_eq!(cursor.next().unwrap(), 1);
        assert!(!cursor.has_next().unwrap());
        assert_eq!(cursor.next(), Err(SequenceError::exhausted("init")));
    }

    #[rstest]
    fn test_init_infinite_counts_from_one() {
        let first = to_vec(take(5, init_infinite(|n| n))).unwrap();
        assert_eq!(first, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_unfold_seed_already_finished_is_empty() {
        let mut cursor = unfold(|n: u8| (n, n + 1), |_: &u8| true, 0)
            .create_cursor()
            .unwrap();
        assert!(!cursor.has_next().unwrap());
        assert_eq!(cursor.next(), Err(SequenceError::exhausted("unfold")));
    }

    #[rstest]
    fn test_unfold_steps_once_per_element() {
        let steps = Cell::new(0);
        let sequence = unfold(
            |n: u32| {
                steps.set(steps.get() + 1);
                (n, n + 1)
            },
            |n: &u32| *n >= 3,
            0,
        );
        let mut cursor = sequence.create_cursor().unwrap();
        assert!(cursor.has_next().unwrap());
        assert_eq!(steps.get(), 0);
        assert_eq!(cursor.next().unwrap(), 0);
        assert_eq!(steps.get(), 1);
    }

    #[rstest]
    fn test_unfold_option_has_next_is_idempotent() {
        let steps = Cell::new(0);
        let sequence = unfold_option(
            |n: u32| {
                steps.set(steps.get() + 1);
                (n < 2).then_some((n, n + 1))
            },
            0,
        );
        let mut cursor = sequence.create_cursor().unwrap();

        assert!(cursor.has_next().unwrap());
        assert!(cursor.has_next().unwrap());
        assert_eq!(steps.get(), 1);

        assert_eq!(cursor.next().unwrap(), 0);
        assert_eq!(cursor.next().unwrap(), 1);
        assert!(!cursor.has_next().unwrap());
        assert!(!cursor.has_next().unwrap());
        assert_eq!(steps.get(), 3);
        assert_eq!(
            cursor.next(),
            Err(SequenceError::exhausted("unfold_option"))
        );
    }

    #[rstest]
    fn test_unfold_forms_agree() {
        let finite = unfold(|n: i32| (n * 2, n + 1), |n: &i32| *n > 10, 1);
        let signalling = unfold_option(|n: i32| (n <= 10).then(|| (n * 2, n + 1)), 1);
        assert_eq!(to_vec(finite).unwrap(), to_vec(signalling).unwrap());
    }
}
