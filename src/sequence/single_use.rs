//! The single-use sequence wrapper.
//!
//! Every lazy combinator returns a [`LazySequence`]. It holds a factory that
//! builds the combinator's cursor (and, through it, the upstream cursors),
//! and allows that factory to run exactly once.

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{Cursor, Sequence};
use crate::error::{Result, SequenceError};

type CursorFactory<'a, C> = Box<dyn FnOnce() -> Result<C> + 'a>;

/// A one-shot sequence: it yields at most one cursor over its lifetime.
///
/// The lifetime `'a` bounds whatever the factory borrows, typically an
/// upstream sequence held by reference or a closure capturing local state.
///
/// # Examples
///
/// ```rust
/// use lazyseq::SequenceError;
/// use lazyseq::sequence::{IterCursor, LazySequence, Sequence};
///
/// let sequence = LazySequence::new("numbers", || Ok(IterCursor::new(1..=3)));
/// assert!(!sequence.is_traversed());
///
/// let _cursor = sequence.create_cursor().unwrap();
/// assert!(sequence.is_traversed());
///
/// assert_eq!(
///     sequence.create_cursor().err(),
///     Some(SequenceError::multiple_traversal("numbers"))
/// );
/// ```
pub struct LazySequence<'a, C> {
    name: &'static str,
    traversed: AtomicBool,
    factory: Cell<Option<CursorFactory<'a, C>>>,
}

impl<'a, C: Cursor> LazySequence<'a, C> {
    /// Creates a lazy sequence whose cursor is built by `factory`.
    ///
    /// `name` identifies the combinator in error messages. The factory does
    /// not run until [`create_cursor`](Sequence::create_cursor) is called.
    pub fn new<F>(name: &'static str, factory: F) -> Self
    where
        F: FnOnce() -> Result<C> + 'a,
    {
        Self {
            name,
            traversed: AtomicBool::new(false),
            factory: Cell::new(Some(Box::new(factory))),
        }
    }
}

impl<C> LazySequence<'_, C> {
    /// Returns the combinator name this sequence reports in errors.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns whether the one cursor of this sequence has been requested.
    #[inline]
    pub fn is_traversed(&self) -> bool {
        self.traversed.load(Ordering::Acquire)
    }
}

impl<C: Cursor> Sequence for LazySequence<'_, C> {
    type Item = C::Item;
    type Cursor = C;

    fn create_cursor(&self) -> Result<C> {
        if self
            .traversed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("{}: rejected a second traversal", self.name);
            return Err(SequenceError::multiple_traversal(self.name));
        }

        let factory = self
            .factory
            .take()
            .ok_or(SequenceError::multiple_traversal(self.name))?;
        trace!("{}: cursor created", self.name);
        factory()
    }
}

impl<C> fmt::Debug for LazySequence<'_, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazySequence")
            .field("name", &self.name)
            .field("traversed", &self.is_traversed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::IterCursor;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[rstest]
    fn test_create_cursor_succeeds_once() {
        let sequence = LazySequence::new("source", || Ok(IterCursor::new(0..3)));

        assert!(sequence.create_cursor().is_ok());
        assert_eq!(
            sequence.create_cursor().err(),
            Some(SequenceError::multiple_traversal("source"))
        );
        assert_eq!(
            sequence.create_cursor().err(),
            Some(SequenceError::multiple_traversal("source"))
        );
    }

    #[rstest]
    fn test_factory_is_deferred_until_cursor_creation() {
        let calls = Cell::new(0);
        let sequence = LazySequence::new("source", || {
            calls.set(calls.get() + 1);
            Ok(IterCursor::new(0..3))
        });

        assert_eq!(calls.get(), 0);
        let _ = sequence.create_cursor();
        assert_eq!(calls.get(), 1);
        let _ = sequence.create_cursor();
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_is_traversed_flips_on_first_cursor() {
        let sequence = LazySequence::new("source", || Ok(IterCursor::new(0..3)));
        assert!(!sequence.is_traversed());
        let _ = sequence.create_cursor();
        assert!(sequence.is_traversed());
    }

    #[rstest]
    fn test_factory_error_is_propagated() {
        let sequence: LazySequence<'_, IterCursor<std::ops::Range<i32>>> =
            LazySequence::new("broken", || Err(SequenceError::exhausted("upstream")));

        assert_eq!(
            sequence.create_cursor().err(),
            Some(SequenceError::exhausted("upstream"))
        );
        assert!(sequence.is_traversed());
    }

    #[rstest]
    fn test_factory_may_capture_thread_local_state() {
        let shared = Rc::new(RefCell::new(vec![1, 2, 3]));
        let captured = Rc::clone(&shared);
        let sequence = LazySequence::new("local", move || {
            Ok(IterCursor::new(captured.borrow_mut().drain(..).collect::<Vec<_>>()))
        });

        let mut cursor = sequence.create_cursor().unwrap();
        assert!(shared.borrow().is_empty());
        assert_eq!(cursor.next().unwrap(), 1);
        assert_eq!(Rc::strong_count(&shared), 1);
        assert_eq!(
            sequence.create_cursor().err(),
            Some(SequenceError::multiple_traversal("local"))
        );
    }

    #[rstest]
    fn test_debug_reports_name_and_state() {
        let sequence = LazySequence::new("source", || Ok(IterCursor::new(0..3)));
        let debug_string = format!("{sequence:?}");
        assert!(debug_string.contains("source"));
        assert!(debug_string.contains("traversed: false"));
    }
}
