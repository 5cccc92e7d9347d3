//! Reserve state and the liquidity-share ledger.
//!
//! # Invariants
//!
//! - `total_liquidity == Σ shares[account]`.
//! - Accounts with zero shares have no entry.
//! - Once initialized, both reserves are positive unless every share has
//!   been burned.

use std::collections::BTreeMap;

use crate::domain::{Address, Amount, Liquidity};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;

/// The pool's reserves and share ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct PoolState {
    pub(crate) native_reserve: Amount,
    pub(crate) token_reserve: Amount,
    pub(crate) total_liquidity: Liquidity,
    pub(crate) initialized: bool,
    shares: BTreeMap<Address, Liquidity>,
}

/// The slice of [`PoolState`] a single call can touch.
///
/// Every entry point mutates at most the reserves, the total, the
/// initialized flag and the caller's own share balance, so restoring these
/// fields undoes any partial call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint {
    native_reserve: Amount,
    token_reserve: Amount,
    total_liquidity: Liquidity,
    initialized: bool,
    account: Address,
    account_shares: Liquidity,
}

impl PoolState {
    /// Shares held by `account`.
    pub(crate) fn shares_of(&self, account: &Address) -> Liquidity {
        self.shares.get(account).copied().unwrap_or_default()
    }

    /// All accounts with a non-zero share balance.
    pub(crate) fn holders(&self) -> impl Iterator<Item = (&Address, &Liquidity)> {
        self.shares.iter()
    }

    /// Mints `amount` shares to `account`.
    pub(crate) fn mint_shares(&mut self, account: Address, amount: Liquidity) -> Result<()> {
        let held = self
            .shares_of(&account)
            .safe_add(&amount, "account shares")?;
        let total = self
            .total_liquidity
            .safe_add(&amount, "total liquidity")?;
        self.set_shares(account, held);
        self.total_liquidity = total;
        Ok(())
    }

    /// Burns `amount` shares from `account`.
    pub(crate) fn burn_shares(&mut self, account: Address, amount: Liquidity) -> Result<()> {
        let held = self
            .shares_of(&account)
            .checked_sub(&amount)
            .ok_or(DexError::InsufficientShares)?;
        let total = self
            .total_liquidity
            .safe_sub(&amount, "total liquidity")?;
        self.set_shares(account, held);
        self.total_liquidity = total;
        Ok(())
    }

    fn set_shares(&mut self, account: Address, amount: Liquidity) {
        if amount.is_zero() {
            self.shares.remove(&account);
        } else {
            self.shares.insert(account, amount);
        }
    }

    /// Captures everything a call by `account` may change.
    pub(crate) fn checkpoint(&self, account: Address) -> Checkpoint {
        Checkpoint {
            native_reserve: self.native_reserve,
            token_reserve: self.token_reserve,
            total_liquidity: self.total_liquidity,
            initialized: self.initialized,
            account,
            account_shares: self.shares_of(&account),
        }
    }

    /// Puts the state back to `checkpoint`.
    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.native_reserve = checkpoint.native_reserve;
        self.token_reserve = checkpoint.token_reserve;
        self.total_liquidity = checkpoint.total_liquidity;
        self.initialized = checkpoint.initialized;
        self.set_shares(checkpoint.account, checkpoint.account_shares);
    }
}
