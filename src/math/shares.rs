//! Proportional share math for deposits and withdrawals.
//!
//! A deposit must preserve the reserve ratio, so the token side is derived
//! from the native side:
//!
//! ```text
//! token_required   = ⌈ native_in × token_reserve / native_reserve ⌉
//! liquidity_minted = ⌊ native_in × total_liquidity / native_reserve ⌋
//! ```
//!
//! A withdrawal pays out the burned fraction of both reserves:
//!
//! ```text
//! native_out = ⌊ liquidity × native_reserve / total_liquidity ⌋
//! token_out  = ⌊ liquidity × token_reserve  / total_liquidity ⌋
//! ```
//!
//! Every division rounds in the pool's favour, so the directions differ
//! between the two formulas.  Rounding dust stays in the reserves.

use super::div_round;
use super::wide::{mul, narrow, widen};
use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::{DexError, Result};

/// What a deposit of a given native amount costs and mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositQuote {
    /// Tokens the depositor must supply alongside the native amount.
    pub token_required: Amount,
    /// Shares the depositor receives.
    pub liquidity_minted: Liquidity,
}

/// What burning a given number of shares pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawQuote {
    /// Native units paid to the holder.
    pub native_out: Amount,
    /// Tokens paid to the holder.
    pub token_out: Amount,
}

/// `⌊or⌈ a × b / d ⌉` through a 512-bit product.
fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding, what: &'static str) -> Result<u128> {
    let product = mul(widen(a), widen(b), what)?;
    let quotient = div_round(product, widen(d), rounding).ok_or(DexError::InvalidReserves)?;
    narrow(quotient, what)
}

/// Computes the token requirement and shares minted for a deposit.
///
/// # Errors
///
/// - [`DexError::InvalidReserves`] if either reserve is zero.
/// - [`DexError::Overflow`] if the token requirement or minted shares do
///   not fit in `u128`.
pub fn quote_deposit(
    native_in: Amount,
    native_reserve: Amount,
    token_reserve: Amount,
    total_liquidity: Liquidity,
) -> Result<DepositQuote> {
    if native_reserve.is_zero() || token_reserve.is_zero() {
        return Err(DexError::InvalidReserves);
    }

    let token_required = mul_div(
        native_in.get(),
        token_reserve.get(),
        native_reserve.get(),
        Rounding::Up,
        "deposit token requirement",
    )?;
    let liquidity_minted = mul_div(
        native_in.get(),
        total_liquidity.get(),
        native_reserve.get(),
        Rounding::Down,
        "deposit minted shares",
    )?;

    Ok(DepositQuote {
        token_required: Amount::new(token_required),
        liquidity_minted: Liquidity::new(liquidity_minted),
    })
}

/// Computes the payouts for burning `liquidity` shares.
///
/// # Errors
///
/// - [`DexError::InvalidReserves`] if `total_liquidity` is zero.
/// - [`DexError::InsufficientShares`] if `liquidity` exceeds
///   `total_liquidity`.
pub fn quote_withdraw(
    liquidity: Liquidity,
    native_reserve: Amount,
    token_reserve: Amount,
    total_liquidity: Liquidity,
) -> Result<WithdrawQuote> {
    if total_liquidity.is_zero() {
        return Err(DexError::InvalidReserves);
    }
    if liquidity > total_liquidity {
        return Err(DexError::InsufficientShares);
    }

    // liquidity <= total, so neither payout can exceed its reserve.
    let native_out = mul_div(
        liquidity.get(),
        native_reserve.get(),
        total_liquidity.get(),
        Rounding::Down,
        "withdraw native payout",
    )?;
    let token_out = mul_div(
        liquidity.get(),
        token_reserve.get(),
        total_liquidity.get(),
        Rounding::Down,
        "withdraw token payout",
    )?;

    Ok(WithdrawQuote {
        native_out: Amount::new(native_out),
        token_out: Amount::new(token_out),
    })
}
