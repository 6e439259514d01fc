//! The traversal protocol shared by every lazy combinator.
//!
//! A [`Sequence`] is anything that can mint a [`Cursor`]; a cursor is the
//! mutable handle that walks the elements forward with
//! [`has_next`](Cursor::has_next) and [`next`](Cursor::next).
//!
//! - [`LazySequence`]: the single-use wrapper every combinator returns
//! - [`IterCursor`]: adapts any `Iterator` to the cursor protocol
//! - [`CursorIter`]: adapts a cursor back into an `Iterator`
//! - [`from_iter`], [`empty`], [`singleton`]: one-shot sources
//! - [`to_vec`], [`fold`], [`for_each`], [`count`]: terminal operations
//!
//! In-memory containers (`Vec<T>`, `[T]`, `[T; N]`) are sequences too. They
//! are restartable: each call to `create_cursor` walks a fresh copy.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::{Cursor, Sequence, from_iter};
//!
//! let sequence = from_iter(vec![1, 2, 3]);
//! let mut cursor = sequence.create_cursor().unwrap();
//!
//! assert!(cursor.has_next().unwrap());
//! assert_eq!(cursor.next().unwrap(), 1);
//!
//! // One cursor per lazy sequence
//! assert!(sequence.create_cursor().is_err());
//! ```

mod consume;
mod lookahead;
mod single_use;
mod source;

pub use consume::{CursorIter, count, fold, for_each, to_vec};
#[cfg(feature = "lazy")]
pub(crate) use lookahead::Lookahead;
pub use single_use::LazySequence;
pub use source::{IterCursor, empty, from_iter, singleton};

use crate::error::Result;

/// A forward-only traversal handle.
///
/// `has_next` may look ahead (and so may pull from upstream cursors), but
/// calling it repeatedly without an intervening `next` never advances the
/// traversal further and always returns the same answer. Once `has_next`
/// returns `false` it keeps returning `false`, and `next` keeps failing with
/// [`SequenceError::ExhaustedCursor`](crate::SequenceError::ExhaustedCursor).
pub trait Cursor {
    /// The element type produced by this cursor.
    type Item;

    /// Reports whether another element is available.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by upstream cursors while looking ahead,
    /// such as uneven lengths detected by `zip`.
    fn has_next(&mut self) -> Result<bool>;

    /// Consumes and returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ExhaustedCursor`](crate::SequenceError::ExhaustedCursor)
    /// when no element remains, or any error raised upstream.
    fn next(&mut self) -> Result<Self::Item>;
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }
}

/// Something that can create a [`Cursor`] over its elements.
///
/// Lazy sequences allow this exactly once; in-memory containers allow it any
/// number of times.
pub trait Sequence {
    /// The element type.
    type Item;

    /// The cursor type this sequence creates.
    type Cursor: Cursor<Item = Self::Item>;

    /// Creates a cursor positioned before the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MultipleTraversal`](crate::SequenceError::MultipleTraversal)
    /// if this is a one-shot sequence whose cursor has already been created.
    fn create_cursor(&self) -> Result<Self::Cursor>;
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    #[inline]
    fn create_cursor(&self) -> Result<Self::Cursor> {
        (**self).create_cursor()
    }
}
