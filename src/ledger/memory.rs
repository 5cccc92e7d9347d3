//! In-memory fungible ledger.

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::{Ledger, TokenLedger};

/// A fungible ledger held entirely in memory, with ERC-20 semantics.
///
/// Serves as the native-asset ledger and as the token ledger in tests,
/// demos and simulations.  Supply is created with [`MemoryLedger::mint`].
///
/// An allowance of [`Amount::MAX`] is treated as unlimited and is not
/// consumed by `transfer_from`.
///
/// # Examples
///
/// ```
/// use cpmm_dex::domain::{Address, Amount};
/// use cpmm_dex::ledger::MemoryLedger;
/// use cpmm_dex::traits::{Ledger, TokenLedger};
///
/// let alice = Address::from_bytes([1u8; 32]);
/// let pool = Address::from_bytes([2u8; 32]);
/// let mut token = MemoryLedger::new(Address::from_bytes([3u8; 32]));
/// token.mint(alice, Amount::new(100)).expect("mint");
///
/// token.approve(alice, pool, Amount::new(40));
/// token.transfer_from(pool, alice, pool, Amount::new(40)).expect("pull");
/// assert_eq!(token.balance_of(&pool), Amount::new(40));
/// assert_eq!(token.allowance(&alice, &pool), Amount::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLedger {
    address: Address,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
}

impl MemoryLedger {
    /// Creates an empty ledger identified by `address`.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            total_supply: Amount::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Creates `amount` new units in `account`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the total supply would
    /// overflow.
    pub fn mint(&mut self, account: Address, amount: Amount) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        // Every balance is bounded by the supply, so this cannot overflow.
        let balance = self
            .balance_of(&account)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(account, balance);
        Ok(())
    }

    /// Total units in existence.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }
}

impl Ledger for MemoryLedger {
    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), LedgerError> {
        let from_balance = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance_of(&to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(from, from_balance);
        self.balances.insert(to, to_balance);
        Ok(())
    }
}

impl TokenLedger for MemoryLedger {
    fn address(&self) -> Address {
        self.address
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let allowed = self.allowance(&from, &spender);
        let remaining = allowed
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance)?;
        self.transfer(from, to, amount)?;
        if allowed != Amount::MAX {
            self.approve(from, spender, remaining);
        }
        Ok(())
    }
}
