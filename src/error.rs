//! Error types for lazy sequence traversal.
//!
//! Every contract violation in the engine surfaces as a [`SequenceError`],
//! raised synchronously at the call that violated the contract. Nothing in
//! the engine retries or swallows these errors.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::SequenceError;
//!
//! let error = SequenceError::multiple_traversal("map");
//! assert_eq!(
//!     format!("{error}"),
//!     "map: sequence has already been traversed. A lazy sequence yields only one cursor."
//! );
//! ```

/// Represents errors raised while building or traversing a lazy sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A second cursor was requested from a one-shot sequence.
    ///
    /// The sequence itself is left untouched; only the call fails.
    #[error(
        "{combinator}: sequence has already been traversed. A lazy sequence yields only one cursor."
    )]
    MultipleTraversal {
        /// The combinator that produced the sequence.
        combinator: &'static str,
    },

    /// `next()` was called on a cursor with no remaining elements.
    #[error("{combinator}: cursor is exhausted")]
    ExhaustedCursor {
        /// The combinator whose cursor was exhausted.
        combinator: &'static str,
    },

    /// A multi-source combinator found sources of different lengths.
    ///
    /// Reported at the point of divergence, since lazy sources have no known
    /// length until they are traversed.
    #[error("{combinator}: sources have uneven lengths, diverging at position {position}")]
    UnevenLength {
        /// The combinator that detected the mismatch.
        combinator: &'static str,
        /// Zero-based index of the first position where one source ended.
        position: usize,
    },

    /// A combinator was constructed with an argument it cannot accept.
    #[error("{combinator}: invalid argument: {message}")]
    InvalidArgument {
        /// The combinator that rejected the argument.
        combinator: &'static str,
        /// What was wrong with the argument.
        message: String,
    },

    /// An optional result carrier was read in the absent state.
    #[error("optional value is absent")]
    MissingValue,

    /// An eager operation asked for more elements than its source holds.
    #[error("{combinator}: requested {requested} elements but only {available} are available")]
    NoSuchElement {
        /// The eager operation that failed.
        combinator: &'static str,
        /// Number of elements requested.
        requested: usize,
        /// Number of elements the source actually held.
        available: usize,
    },
}

impl SequenceError {
    /// Creates a [`SequenceError::MultipleTraversal`] for the given combinator.
    #[inline]
    pub const fn multiple_traversal(combinator: &'static str) -> Self {
        Self::MultipleTraversal { combinator }
    }

    /// Creates a [`SequenceError::ExhaustedCursor`] for the given combinator.
    #[inline]
    pub const fn exhausted(combinator: &'static str) -> Self {
        Self::ExhaustedCursor { combinator }
    }

    /// Creates a [`SequenceError::UnevenLength`] diverging at `position`.
    #[inline]
    pub const fn uneven_length(combinator: &'static str, position: usize) -> Self {
        Self::UnevenLength {
            combinator,
            position,
        }
    }

    /// Creates a [`SequenceError::InvalidArgument`] with a description.
    pub fn invalid_argument(combinator: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            combinator,
            message: message.into(),
        }
    }

    /// Returns `true` if this error reports an exhausted cursor.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::ExhaustedCursor { .. })
    }
}

/// Result type used throughout the crate.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        SequenceError::multiple_traversal("filter"),
        "filter: sequence has already been traversed. A lazy sequence yields only one cursor."
    )]
    #[case(SequenceError::exhausted("take"), "take: cursor is exhausted")]
    #[case(
        SequenceError::uneven_length("zip", 2),
        "zip: sources have uneven lengths, diverging at position 2"
    )]
    #[case(
        SequenceError::invalid_argument("init", "count must be at least 1, got 0"),
        "init: invalid argument: count must be at least 1, got 0"
    )]
    #[case(SequenceError::MissingValue, "optional value is absent")]
    #[case(
        SequenceError::NoSuchElement { combinator: "take", requested: 5, available: 3 },
        "take: requested 5 elements but only 3 are available"
    )]
    fn test_sequence_error_display(#[case] error: SequenceError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_sequence_error_is_exhausted() {
        assert!(SequenceError::exhausted("map").is_exhausted());
        assert!(!SequenceError::multiple_traversal("map").is_exhausted());
    }

    #[rstest]
    fn test_sequence_error_equality() {
        assert_eq!(
            SequenceError::uneven_length("zip", 1),
            SequenceError::uneven_length("zip", 1)
        );
        assert_ne!(
            SequenceError::uneven_length("zip", 1),
            SequenceError::uneven_length("zip3", 1)
        );
    }

    #[rstest]
    fn test_sequence_error_source_is_none() {
        use std::error::Error;

        let error = SequenceError::exhausted("map");
        assert!(error.source().is_none());
    }
}
