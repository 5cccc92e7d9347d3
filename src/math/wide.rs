//! 512-bit intermediate integer for products of reserve-scale values.
//!
//! Every product in the exchange multiplies two `u128` quantities and
//! possibly a small constant (`997`, `1000`).  Such a product needs up to
//! 266 bits, so it is computed in [`U512`] and narrowed back to `u128`
//! only after the final division.  Narrowing a value that does not fit is
//! an error, never a truncation.

use crate::error::{DexError, Result};

#[allow(missing_docs, clippy::all)]
mod u512 {
    uint::construct_uint! {
        /// 512-bit unsigned integer used for intermediate products.
        pub struct U512(8);
    }
}

pub use u512::U512;

/// Widens a `u128` into a [`U512`].
#[inline]
#[must_use]
pub fn widen(value: u128) -> U512 {
    U512::from(value)
}

/// Narrows a [`U512`] back into a `u128`.
///
/// # Errors
///
/// Returns [`DexError::Overflow`] tagged with `what` if `value` exceeds
/// `u128::MAX`.
pub fn narrow(value: U512, what: &'static str) -> Result<u128> {
    if value > U512::from(u128::MAX) {
        return Err(DexError::Overflow(what));
    }
    Ok(value.low_u128())
}

/// Checked `a * b` in 512 bits.
///
/// # Errors
///
/// Returns [`DexError::Overflow`] tagged with `what` if the product does
/// not fit.  This cannot happen for operands that were widened from
/// `u128` and multiplied by at most one small constant.
pub fn mul(a: U512, b: U512, what: &'static str) -> Result<U512> {
    a.checked_mul(b).ok_or(DexError::Overflow(what))
}

/// Checked `a + b` in 512 bits.
///
/// # Errors
///
/// Returns [`DexError::Overflow`] tagged with `what` if the sum does not
/// fit.
pub fn add(a: U512, b: U512, what: &'static str) -> Result<U512> {
    a.checked_add(b).ok_or(DexError::Overflow(what))
}
