//! Constant-product pricing with a 0.3% input-side fee.
//!
//! ```text
//! input_with_fee = input × 997
//! output         = ⌊ input_with_fee × reserve_out / (reserve_in × 1000 + input_with_fee) ⌋
//! ```
//!
//! The fee stays in the input reserve, so `reserve_in × reserve_out`
//! strictly grows with every non-trivial trade.  Because the denominator
//! always exceeds `input_with_fee`, the output is strictly below
//! `reserve_out`: no single trade can drain a reserve.

use super::wide::{add, mul, narrow, widen};
use super::div_round;
use crate::domain::{Amount, Rounding};
use crate::error::{DexError, Result};

/// Fraction of the input that reaches the curve, numerator.
pub const FEE_NUMERATOR: u128 = 997;

/// Fraction of the input that reaches the curve, denominator.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Returns how much of the output asset a trade of `input_amount` buys.
///
/// Pure: no state is read or written.  All intermediates are 512-bit,
/// so any `u128` inputs are accepted.
///
/// # Errors
///
/// Returns [`DexError::InvalidReserves`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use cpmm_dex::domain::Amount;
/// use cpmm_dex::math::price;
///
/// // 1000 in against (1 000 000, 2 000 000) reserves.
/// let out = price(Amount::new(1_000), Amount::new(1_000_000), Amount::new(2_000_000));
/// assert_eq!(out, Ok(Amount::new(1_992)));
/// ```
pub fn price(input_amount: Amount, input_reserve: Amount, output_reserve: Amount) -> Result<Amount> {
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(DexError::InvalidReserves);
    }

    let input_with_fee = mul(
        widen(input_amount.get()),
        widen(FEE_NUMERATOR),
        "price input with fee",
    )?;
    let numerator = mul(input_with_fee, widen(output_reserve.get()), "price numerator")?;
    let scaled_reserve = mul(
        widen(input_reserve.get()),
        widen(FEE_DENOMINATOR),
        "price scaled reserve",
    )?;
    let denominator = add(scaled_reserve, input_with_fee, "price denominator")?;

    let output = div_round(numerator, denominator, Rounding::Down).ok_or(DexError::InvalidReserves)?;
    narrow(output, "price output").map(Amount::new)
}
