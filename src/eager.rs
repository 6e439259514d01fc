//! Eager siblings of the lazy combinators.
//!
//! These materialise their whole result at once. Where the lazy form is
//! forgiving (`take` and `skip` past the end simply yield less), the eager
//! form is strict and reports [`SequenceError::NoSuchElement`].
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::{SequenceError, eager};
//!
//! assert_eq!(eager::take(2, &[1, 2, 3]), Ok(vec![1, 2]));
//! assert_eq!(
//!     eager::take(5, &[1, 2, 3]),
//!     Err(SequenceError::NoSuchElement { combinator: "take", requested: 5, available: 3 })
//! );
//! ```

use crate::error::{Result, SequenceError};
use crate::lazy;
use crate::sequence;

fn ensure_available(combinator: &'static str, requested: usize, available: usize) -> Result<()> {
    if requested > available {
        debug!("{combinator}: requested {requested} of {available} elements");
        return Err(SequenceError::NoSuchElement {
            combinator,
            requested,
            available,
        });
    }
    Ok(())
}

/// Returns the first `count` elements.
///
/// # Errors
///
/// Returns [`SequenceError::NoSuchElement`] if `source` has fewer than
/// `count` elements.
pub fn take<T: Clone>(count: usize, source: &[T]) -> Result<Vec<T>> {
    ensure_available("take", count, source.len())?;
    Ok(source[..count].to_vec())
}

/// Returns everything after the first `count` elements.
///
/// # Errors
///
/// Returns [`SequenceError::NoSuchElement`] if `source` has fewer than
/// `count` elements.
pub fn skip<T: Clone>(count: usize, source: &[T]) -> Result<Vec<T>> {
    ensure_available("skip", count, source.len())?;
    Ok(source[count..].to_vec())
}

/// Builds `[function(1), ..., function(count)]`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `count` is 0.
pub fn init<T, F>(function: F, count: usize) -> Result<Vec<T>>
where
    F: FnMut(usize) -> T,
{
    sequence::to_vec(lazy::init(function, count)?)
}

/// Threads `seed` through `step` until `is_finished` holds, collecting the
/// emitted values.
pub fn unfold<S, T, F, P>(mut step: F, mut is_finished: P, seed: S) -> Vec<T>
where
    F: FnMut(S) -> (T, S),
    P: FnMut(&S) -> bool,
{
    let mut values = Vec::new();
    let mut state = seed;
    while !is_finished(&state) {
        let (value, next_state) = step(state);
        values.push(value);
        state = next_state;
    }
    values
}

/// Pairs up two slices of equal length.
///
/// # Errors
///
/// Returns [`SequenceError::UnevenLength`] at the length of the shorter
/// slice if the lengths differ.
pub fn zip<A: Clone, B: Clone>(first: &[A], second: &[B]) -> Result<Vec<(A, B)>> {
    if first.len() != second.len() {
        let position = first.len().min(second.len());
        debug!("zip: lengths {} and {} differ", first.len(), second.len());
        return Err(SequenceError::uneven_length("zip", position));
    }
    Ok(first.iter().cloned().zip(second.iter().cloned()).collect())
}

/// Keeps the present results of `function`.
pub fn choose<T, U, F>(function: F, source: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> Option<U>,
{
    source.iter().filter_map(function).collect()
}

/// Splits `source` into the elements satisfying `predicate` and the rest,
/// both in their original order.
pub fn partition<T, P>(mut predicate: P, source: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    source.iter().cloned().partition(|element| predicate(element))
}
