//! The optional result carrier used by `choose` and `unfold_option`.
//!
//! Any type implementing [`OptionalResult`] can tell those combinators
//! "emit this value" (present) or "nothing here" (absent). The standard
//! `Option` is the carrier almost every caller will use.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::{OptionalResult, SequenceError};
//!
//! let present = <Option<i32> as OptionalResult>::present(3);
//! assert!(present.is_present());
//! assert_eq!(present.get(), Ok(3));
//!
//! let absent = <Option<i32> as OptionalResult>::absent();
//! assert_eq!(absent.get(), Err(SequenceError::MissingValue));
//! ```

use crate::error::{Result, SequenceError};

/// A two-state carrier: a present value or nothing.
pub trait OptionalResult: Sized {
    /// The carried value type.
    type Value;

    /// Wraps a value in the present state.
    fn present(value: Self::Value) -> Self;

    /// Returns the absent state.
    fn absent() -> Self;

    /// Returns `true` if a value is present.
    fn is_present(&self) -> bool;

    /// Extracts the value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MissingValue`] if the carrier is absent.
    fn get(self) -> Result<Self::Value>;
}

impl<T> OptionalResult for Option<T> {
    type Value = T;

    #[inline]
    fn present(value: T) -> Self {
        Some(value)
    }

    #[inline]
    fn absent() -> Self {
        None
    }

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn get(self) -> Result<T> {
        self.ok_or(SequenceError::MissingValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_present_round_trip() {
        let carrier: Option<&str> = OptionalResult::present("value");
        assert!(carrier.is_present());
        assert_eq!(carrier.get(), Ok("value"));
    }

    #[rstest]
    fn test_absent_get_is_missing_value() {
        let carrier: Option<u8> = OptionalResult::absent();
        assert!(!carrier.is_present());
        assert_eq!(carrier.get(), Err(SequenceError::MissingValue));
    }
}
