//! Checked arithmetic trait for the domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning inherent methods of
//! [`Amount`] and [`Liquidity`] into `Result`s carrying a tagged
//! [`DexError::Overflow`], so state updates can use `?` and report which
//! update went out of range.
//!
//! # Examples
//!
//! ```
//! use cpmm_dex::domain::Amount;
//! use cpmm_dex::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! assert_eq!(reserve.safe_add(&Amount::new(5), "reserve"), Ok(Amount::new(1_005)));
//! assert!(reserve.safe_sub(&Amount::new(1_001), "reserve").is_err());
//! ```

use crate::domain::{Amount, Liquidity};
use crate::error::{DexError, Result};

/// Fallible addition and subtraction for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every out-of-range result is an `Err`.
/// - **No saturation**: a clamped reserve would silently break the pool's
///   invariants, so errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] tagged with `what` on overflow.
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] tagged with `what` if the result
    /// would be negative.
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(DexError::Overflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(DexError::Overflow(what))
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(DexError::Overflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(DexError::Overflow(what))
    }
}
