//! Liquidity share units.

use core::fmt;

/// A quantity of liquidity shares.
///
/// Shares represent proportional ownership of both reserves.  They are
/// minted on `init` and `deposit` and burned on `withdraw`.  This is a
/// separate type from [`Amount`](super::Amount) so that a share count can
/// never be passed where an asset quantity is expected.
///
/// At genesis one share is worth exactly one native unit; afterwards the
/// exchange rate drifts upward as swap fees accrue to the reserves.
///
/// # Examples
///
/// ```
/// use cpmm_dex::domain::Liquidity;
///
/// let held = Liquidity::new(5_000);
/// let burned = Liquidity::new(2_000);
/// assert_eq!(held.checked_sub(&burned), Some(Liquidity::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Liquidity(u128);

impl Liquidity {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Liquidity` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
