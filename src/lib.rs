//! # lazyseq
//!
//! Single-traversal lazy sequences built from explicit cursor state machines.
//!
//! ## Overview
//!
//! A lazy sequence computes its elements on demand, one at a time, during a
//! single forward traversal. Combinators chain into a pull-based pipeline:
//! nothing runs until the final consumer creates a cursor and starts
//! pulling, and no stage reads further ahead than its own termination logic
//! requires.
//!
//! - **Sequence protocol**: [`Sequence`], [`Cursor`], [`LazySequence`]
//! - **Lazy combinators**: map, filter, choose, skip, take, init, unfold, zip, ...
//! - **Eager siblings**: strict, materialising counterparts
//!
//! Every lazy sequence yields exactly one cursor. A second request fails with
//! [`SequenceError::MultipleTraversal`]; there is no way to rewind.
//!
//! ## Feature Flags
//!
//! - `lazy`: Lazy combinators and the `SequenceExt` trait
//! - `eager`: Eager siblings
//! - `tracing`: Diagnostics through the `tracing` crate
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let pipeline = init_infinite(|n| n * 2)
//!     .skip_while(|x: &usize| *x < 5)
//!     .take(3);
//! assert_eq!(pipeline.collect_vec().unwrap(), vec![6, 8, 10]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod logging;

/// Prelude module for convenient imports.
///
/// Re-exports the sequence protocol, the combinators, and the error type.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SequenceError;
    pub use crate::option::OptionalResult;
    pub use crate::sequence::*;

    #[cfg(feature = "lazy")]
    pub use crate::lazy::*;
}

mod error;
mod option;

pub mod sequence;

#[cfg(feature = "lazy")]
pub mod lazy;

#[cfg(feature = "eager")]
pub mod eager;

pub use error::{Result, SequenceError};
pub use option::OptionalResult;
pub use sequence::{Cursor, LazySequence, Sequence};
