//! Arithmetic for the exchange: wide intermediates, rounding, pricing and
//! share math.
//!
//! Everything in this module is pure.  The pool in [`crate::pool`] calls
//! these functions to compute amounts before touching any state.

mod checked;
mod pricing;
mod rounding;
mod shares;
mod wide;

pub use checked::CheckedArithmetic;
pub use pricing::{price, FEE_DENOMINATOR, FEE_NUMERATOR};
pub use rounding::div_round;
pub use shares::{quote_deposit, quote_withdraw, DepositQuote, WithdrawQuote};
pub use wide::{narrow, widen, U512};
