//! Division with an explicit rounding direction.
//!
//! [`div_round`] is the single division primitive of the crate.  It runs
//! on [`U512`] so it can be applied directly to wide products.
//!
//! # Convention
//!
//! **Round against the caller** (pool-favourable): outputs and minted
//! shares round down, required inputs round up.
//!
//! # Examples
//!
//! ```
//! use cpmm_dex::domain::Rounding;
//! use cpmm_dex::math::{div_round, U512};
//!
//! let ten = U512::from(10u64);
//! let three = U512::from(3u64);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U512::from(3u64)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U512::from(4u64)));
//! assert_eq!(div_round(ten, U512::zero(), Rounding::Down), None);
//! ```

use super::U512;
use crate::domain::Rounding;

/// Divides `numerator` by `denominator` rounding in the given direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: U512, denominator: U512, rounding: Rounding) -> Option<U512> {
    if denominator.is_zero() {
        return None;
    }
    let (q, r) = numerator.div_mod(denominator);
    if rounding.is_up() && !r.is_zero() {
        // q < numerator <= U512::MAX whenever r != 0, so q + 1 cannot overflow.
        Some(q + U512::one())
    } else {
        Some(q)
    }
}
