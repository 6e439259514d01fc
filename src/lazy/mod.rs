//! Lazy sequence combinators.
//!
//! Every combinator takes its upstream sequence(s) and a user function and
//! returns a new [`LazySequence`]. Nothing runs until the final consumer
//! creates a cursor and starts pulling; each stage then pulls from the stage
//! above only as far as its own termination logic requires.
//!
//! - Passthrough: [`map`], [`mapi`], [`flat_map`], [`flatten`], [`concat`], [`append`]
//! - Filtering: [`filter`], [`choose`], [`skip`], [`skip_while`], [`take`], [`take_while`]
//! - Generative: [`init`], [`init_infinite`], [`unfold`], [`unfold_option`]
//! - Multi-source: [`zip`], [`zip3`], [`zip_functions`]
//!
//! [`SequenceExt`] offers all of the above in method-call form.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::lazy::SequenceExt;
//! use lazyseq::sequence::from_iter;
//!
//! let result = from_iter(1..)
//!     .map(|x: u32| x * x)
//!     .filter(|x: &u32| x % 2 == 1)
//!     .take(4)
//!     .collect_vec()
//!     .unwrap();
//! assert_eq!(result, vec![1, 9, 25, 49]);
//! ```

mod filtering;
mod generative;
mod multi_source;
mod passthrough;

pub use filtering::{
    ChooseCursor, FilterCursor, SkipCursor, SkipWhileCursor, TakeCursor, TakeWhileCursor, choose,
    filter, skip, skip_while, take, take_while,
};
pub use generative::{
    InitCursor, UnfoldCursor, UnfoldOptionCursor, init, init_infinite, unfold, unfold_option,
};
pub use multi_source::{Zip3Cursor, ZipCursor, ZipFunctionsCursor, zip, zip_functions, zip3};
pub use passthrough::{
    ConcatCursor, FlatMapCursor, MapCursor, MapIndexedCursor, append, concat, flat_map, flatten,
    map, mapi,
};

use std::iter::Once;

use crate::error::Result;
use crate::option::OptionalResult;
use crate::sequence::{self, CursorIter, IterCursor, LazySequence, Sequence};

/// Method-call syntax for every combinator and terminal operation.
///
/// Implemented for every [`Sequence`]. Each method consumes `self`; call it
/// on a reference (`(&sequence).map(...)`) to leave the original in place.
/// For a lazy sequence that still spends its single cursor.
pub trait SequenceExt: Sequence + Sized {
    /// See [`map`].
    fn map<'a, B, F>(self, function: F) -> LazySequence<'a, MapCursor<Self::Cursor, F>>
    where
        Self: 'a,
        F: FnMut(Self::Item) -> B + 'a,
    {
        map(function, self)
    }

    /// See [`mapi`].
    fn mapi<'a, B, F>(self, function: F) -> LazySequence<'a, MapIndexedCursor<Self::Cursor, F>>
    where
        Self: 'a,
        F: FnMut(usize, Self::Item) -> B + 'a,
    {
        mapi(function, self)
    }

    /// See [`flat_map`].
    fn flat_map<'a, T, F>(self, function: F) -> LazySequence<'a, FlatMapCursor<Self::Cursor, F, T>>
    where
        Self: 'a,
        T: Sequence,
        F: FnMut(Self::Item) -> T + 'a,
    {
        flat_map(function, self)
    }

    /// See [`flatten`].
    #[allow(clippy::type_complexity)]
    fn flatten<'a>(
        self,
    ) -> LazySequence<'a, FlatMapCursor<Self::Cursor, fn(Self::Item) -> Self::Item, Self::Item>>
    where
        Self: 'a,
        Self::Item: Sequence,
    {
        flatten(self)
    }

    /// See [`concat`].
    fn concat<'a, B>(self, second: B) -> LazySequence<'a, ConcatCursor<Self::Cursor, B::Cursor>>
    where
        Self: 'a,
        B: Sequence<Item = Self::Item> + 'a,
    {
        concat(self, second)
    }

    /// See [`append`].
    #[allow(clippy::type_complexity)]
    fn append<'a>(
        self,
        value: Self::Item,
    ) -> LazySequence<'a, ConcatCursor<Self::Cursor, IterCursor<Once<Self::Item>>>>
    where
        Self: 'a,
        Self::Item: 'a,
    {
        append(value, self)
    }

    /// See [`filter`].
    fn filter<'a, P>(self, predicate: P) -> LazySequence<'a, FilterCursor<Self::Cursor, P>>
    where
        Self: 'a,
        P: FnMut(&Self::Item) -> bool + 'a,
    {
        filter(predicate, self)
    }

    /// See [`choose`].
    fn choose<'a, O, F>(self, function: F) -> LazySequence<'a, ChooseCursor<Self::Cursor, F, O>>
    where
        Self: 'a,
        O: OptionalResult,
        F: FnMut(Self::Item) -> O + 'a,
    {
        choose(function, self)
    }

    /// See [`skip`].
    fn skip<'a>(self, count: usize) -> LazySequence<'a, SkipCursor<Self::Cursor>>
    where
        Self: 'a,
    {
        skip(count, self)
    }

    /// See [`skip_while`].
    fn skip_while<'a, P>(self, predicate: P) -> LazySequence<'a, SkipWhileCursor<Self::Cursor, P>>
    where
        Self: 'a,
        P: FnMut(&Self::Item) -> bool + 'a,
    {
        skip_while(predicate, self)
    }

    /// See [`take`].
    fn take<'a>(self, count: usize) -> LazySequence<'a, TakeCursor<Self::Cursor>>
    where
        Self: 'a,
    {
        take(count, self)
    }

    /// See [`take_while`].
    fn take_while<'a, P>(self, predicate: P) -> LazySequence<'a, TakeWhileCursor<Self::Cursor, P>>
    where
        Self: 'a,
        P: FnMut(&Self::Item) -> bool + 'a,
    {
        take_while(predicate, self)
    }

    /// See [`zip`].
    fn zip<'a, B>(self, second: B) -> LazySequence<'a, ZipCursor<Self::Cursor, B::Cursor>>
    where
        Self: 'a,
        B: Sequence + 'a,
    {
        zip(self, second)
    }

    /// See [`zip3`].
    #[allow(clippy::type_complexity)]
    fn zip3<'a, B, C>(
        self,
        second: B,
        third: C,
    ) -> LazySequence<'a, Zip3Cursor<Self::Cursor, B::Cursor, C::Cursor>>
    where
        Self: 'a,
        B: Sequence + 'a,
        C: Sequence + 'a,
    {
        zip3(self, second, third)
    }

    /// See [`zip_functions`].
    fn zip_functions<'a, X, Y, F, G>(
        self,
        first: F,
        second: G,
    ) -> LazySequence<'a, ZipFunctionsCursor<Self::Cursor, F, G>>
    where
        Self: 'a,
        F: FnMut(&Self::Item) -> X + 'a,
        G: FnMut(&Self::Item) -> Y + 'a,
    {
        zip_functions(first, second, self)
    }

    /// Creates the cursor and wraps it as an [`Iterator`] of `Result`s.
    ///
    /// # Errors
    ///
    /// Fails if the cursor cannot be created.
    fn into_results(self) -> Result<CursorIter<Self::Cursor>> {
        self.create_cursor().map(CursorIter::new)
    }

    /// See [`sequence::to_vec`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised during traversal.
    fn collect_vec(self) -> Result<Vec<Self::Item>> {
        sequence::to_vec(self)
    }

    /// See [`sequence::fold`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised during traversal.
    fn fold<B, F>(self, initial: B, function: F) -> Result<B>
    where
        F: FnMut(B, Self::Item) -> B,
    {
        sequence::fold(self, initial, function)
    }

    /// See [`sequence::for_each`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised during traversal.
    fn for_each<F>(self, action: F) -> Result<()>
    where
        F: FnMut(Self::Item),
    {
        sequence::for_each(self, action)
    }

    /// See [`sequence::count`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised during traversal.
    fn count(self) -> Result<usize> {
        sequence::count(self)
    }
}

impl<S: Sequence> SequenceExt for S {}
