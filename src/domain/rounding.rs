//! Explicit rounding direction for division.

/// Rounding direction for every division in the exchange.
///
/// Each division names its direction so the rounding policy is visible at
/// the call site:
///
/// | Quantity | Direction |
/// |----------|-----------|
/// | Swap output | [`Rounding::Down`] |
/// | Tokens required by a deposit | [`Rounding::Up`] |
/// | Shares minted by a deposit | [`Rounding::Down`] |
/// | Withdrawal payouts | [`Rounding::Down`] |
///
/// # Examples
///
/// ```
/// use cpmm_dex::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
