//! One-slot lookahead buffer.
//!
//! Cursors whose termination depends on what upstream produces (filter,
//! choose, take-while, and the iterator bridge) answer `has_next` by pulling
//! until they find an element they would emit, then park it here until
//! `next` collects it.

use std::mem;

use crate::error::Result;

/// Lookahead state: nothing buffered, one element buffered, or done for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookahead<T> {
    /// No element is buffered; the next `fill` runs a search.
    Empty,
    /// An accepted element is waiting to be consumed.
    Buffered(T),
    /// A search came back empty. Terminal.
    Finished,
}

impl<T> Lookahead<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self::Empty
    }

    /// Ensures an element is buffered, running `search` only from `Empty`.
    ///
    /// `search` returns `Ok(None)` once upstream has nothing acceptable left,
    /// which latches the buffer into `Finished`. An error from `search`
    /// leaves the buffer `Empty`.
    pub(crate) fn fill<F>(&mut self, search: F) -> Result<bool>
    where
        F: FnOnce() -> Result<Option<T>>,
    {
        match self {
            Self::Buffered(_) => Ok(true),
            Self::Finished => Ok(false),
            Self::Empty => match search()? {
                Some(value) => {
                    *self = Self::Buffered(value);
                    Ok(true)
                }
                None => {
                    *self = Self::Finished;
                    Ok(false)
                }
            },
        }
    }

    /// Removes the buffered element, returning to `Empty`.
    ///
    /// Returns `None` without changing state if nothing is buffered.
    pub(crate) fn take(&mut self) -> Option<T> {
        match mem::replace(self, Self::Empty) {
            Self::Buffered(value) => Some(value),
            other => {
                *self = other;
                None
            }
        }
    }
}
