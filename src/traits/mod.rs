//! Trait seams between the pool and its external collaborators.
//!
//! [`Ledger`] covers the native asset; [`TokenLedger`] extends it with the
//! allowance operations the pool needs to pull tokens from users.

mod ledger;

pub use ledger::{Ledger, TokenLedger};
