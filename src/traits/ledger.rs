//! Collaborator seams: the native and token ledgers.
//!
//! The pool never stores balances itself.  It moves assets through two
//! ledgers it owns handles to:
//!
//! - a [`Ledger`] for the native asset, and
//! - a [`TokenLedger`] for the fungible token, with standard
//!   allowance semantics.
//!
//! # Rollback contract
//!
//! The pool undoes a partially executed call by issuing the inverse
//! operations: a `transfer(to, from, amount)` for every completed
//! transfer, and an `approve(owner, spender, previous)` for every consumed
//! allowance.  Implementations must therefore let an account that just
//! received funds send them straight back.
//!
//! This is a hard requirement.  If a ledger refuses an inverse transfer,
//! the pool still attempts the remaining inverses and then fails the call
//! with [`DexError::RollbackIncomplete`](crate::error::DexError::RollbackIncomplete)
//! instead of the original error, because balances may no longer match
//! their state before the call.

use crate::domain::{Address, Amount};
use crate::error::LedgerError;

/// A balance ledger for one fungible asset.
///
/// Transfers name both parties explicitly; the ledger trusts its caller
/// (the pool) to have authorized the debit.
pub trait Ledger {
    /// Returns `account`'s balance (zero if unknown).
    #[must_use]
    fn balance_of(&self, account: &Address) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::Overflow`] if crediting `to` overflows.
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), LedgerError>;
}

/// A fungible-token ledger with ERC-20 allowance semantics.
pub trait TokenLedger: Ledger {
    /// The token contract's own address.
    #[must_use]
    fn address(&self) -> Address;

    /// Returns how much `spender` may still move out of `owner`.
    #[must_use]
    fn allowance(&self, owner: &Address, spender: &Address) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s balance to exactly
    /// `amount`.
    fn approve(&mut self, owner: Address, spender: Address, amount: Amount);

    /// Moves `amount` from `from` to `to` on behalf of `spender`,
    /// consuming allowance.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is too
    ///   small.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::Overflow`] if crediting `to` overflows.
    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
