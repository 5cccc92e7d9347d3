//! The exchange pool: reserve state, safety gate and entry points.
//!
//! [`Dex`] owns its state and handles to the two ledgers it settles
//! against.  Every mutating entry point takes `&mut self` and a
//! [`CallContext`], and runs as one atomic transaction:
//!
//! 1. **Checks**: safety gate, payability, initialization, amounts.
//! 2. **Effects**: reserves and shares are updated in pool state.
//! 3. **Interactions**: assets move on the ledgers, through a journal.
//!
//! If any step fails, the state is restored from a checkpoint and the
//! journal is unwound before the error is returned; no event is emitted.
//! A ledger that refuses to undo a transfer turns the error into
//! [`DexError::RollbackIncomplete`].
//!
//! The pool's own account never acts as a caller: such calls fail with
//! [`DexError::PoolAccountCaller`] before any other check, since its
//! transfers to itself would move nothing while reserves still changed.
//!
//! The exclusive borrow means a ledger cannot call back into the pool
//! while a call is in flight.

mod gate;
mod journal;
mod liquidity;
mod state;
mod trade;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

use log::{debug, trace, warn};

pub use gate::GateState;

use crate::config::DexConfig;
use crate::domain::{Address, Amount, CallContext, DexEvent, EmergencyStopSet, Liquidity};
use crate::error::{DexError, Result};
use crate::math::{self, DepositQuote, WithdrawQuote};
use crate::traits::{Ledger, TokenLedger};
use gate::SafetyGate;
use journal::Journal;
use state::PoolState;

/// A single constant-product pool between a native asset and one token.
///
/// `N` is the native-asset ledger, `T` the token ledger.  Reserves are
/// held by [`Dex::account`] on both ledgers.
///
/// # Example
///
/// ```rust
/// use cpmm_dex::config::DexConfig;
/// use cpmm_dex::domain::{Address, Amount, CallContext};
/// use cpmm_dex::ledger::MemoryLedger;
/// use cpmm_dex::pool::Dex;
/// use cpmm_dex::traits::TokenLedger;
///
/// let owner = Address::from_bytes([1u8; 32]);
/// let pool = Address::from_bytes([2u8; 32]);
/// let trader = Address::from_bytes([3u8; 32]);
///
/// let mut native = MemoryLedger::new(Address::from_bytes([10u8; 32]));
/// let mut token = MemoryLedger::new(Address::from_bytes([11u8; 32]));
/// native.mint(owner, Amount::new(10_000)).expect("mint");
/// native.mint(trader, Amount::new(1_000)).expect("mint");
/// token.mint(owner, Amount::new(10_000)).expect("mint");
/// token.approve(owner, pool, Amount::new(10_000));
///
/// let config = DexConfig::new(owner, pool).expect("valid config");
/// let mut dex = Dex::new(config, native, token).expect("pool created");
///
/// let seed = CallContext::new(owner).with_value(Amount::new(10_000));
/// dex.init(&seed, Amount::new(10_000)).expect("init");
///
/// let buy = CallContext::new(trader).with_value(Amount::new(1_000));
/// let swap = dex.eth_to_token(&buy).expect("swap");
/// assert_eq!(swap.token_out, Amount::new(906));
/// ```
#[derive(Debug, Clone)]
pub struct Dex<N, T> {
    account: Address,
    gate: SafetyGate,
    state: PoolState,
    native: N,
    token: T,
    events: Vec<DexEvent>,
}

impl<N: Ledger, T: TokenLedger> Dex<N, T> {
    /// Creates an uninitialized pool.
    ///
    /// # Errors
    ///
    /// - Propagates [`DexConfig::validate`] failures.
    /// - [`DexError::InvalidConfig`] if the token ledger's address is the
    ///   zero address or coincides with the pool account.
    pub fn new(config: DexConfig, native: N, token: T) -> Result<Self> {
        config.validate()?;
        let token_address = token.address();
        if token_address.is_zero() {
            return Err(DexError::InvalidConfig(
                "token ledger must not be the zero address",
            ));
        }
        if token_address == config.account() {
            return Err(DexError::InvalidConfig(
                "token ledger and pool account must differ",
            ));
        }
        Ok(Self {
            account: config.account(),
            gate: SafetyGate::new(config.owner()),
            state: PoolState::default(),
            native,
            token,
            events: Vec::new(),
        })
    }

    // -- read accessors -------------------------------------------------------

    /// The owner fixed at construction.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.gate.owner()
    }

    /// The token ledger's address.
    #[must_use]
    pub fn token(&self) -> Address {
        self.token.address()
    }

    /// The pool's own account on both ledgers.
    #[must_use]
    pub const fn account(&self) -> Address {
        self.account
    }

    /// `true` while the emergency stop is active.
    #[must_use]
    pub const fn emergency_stop(&self) -> bool {
        self.gate.state().is_stopped()
    }

    /// The safety gate's current state.
    #[must_use]
    pub const fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// `true` once `init` has succeeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    /// Native units held in reserve.
    pub const fn native_reserve(&self) -> Amount {
        self.state.native_reserve
    }

    /// Tokens held in reserve.
    pub const fn token_reserve(&self) -> Amount {
        self.state.token_reserve
    }

    /// Total outstanding liquidity shares.
    pub const fn total_liquidity(&self) -> Liquidity {
        self.state.total_liquidity
    }

    /// Shares held by `account` (zero if none).
    pub fn liquidity_of(&self, account: &Address) -> Liquidity {
        self.state.shares_of(account)
    }

    /// Every account holding shares, in address order.
    pub fn liquidity_holders(&self) -> impl Iterator<Item = (&Address, &Liquidity)> {
        self.state.holders()
    }

    /// The native-asset ledger.
    pub const fn native_ledger(&self) -> &N {
        &self.native
    }

    /// Mutable access to the native-asset ledger, for funding accounts.
    pub fn native_ledger_mut(&mut self) -> &mut N {
        &mut self.native
    }

    /// The token ledger.
    pub const fn token_ledger(&self) -> &T {
        &self.token
    }

    /// Mutable access to the token ledger, for approvals and funding.
    pub fn token_ledger_mut(&mut self) -> &mut T {
        &mut self.token
    }

    /// Events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[DexEvent] {
        &self.events
    }

    /// Drains and returns the event log.
    pub fn take_events(&mut self) -> Vec<DexEvent> {
        core::mem::take(&mut self.events)
    }

    // -- pricing and quotes ---------------------------------------------------

    /// The pricing function; see [`math::price`].
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidReserves`] if either reserve is zero.
    pub fn price(
        &self,
        input_amount: Amount,
        input_reserve: Amount,
        output_reserve: Amount,
    ) -> Result<Amount> {
        math::price(input_amount, input_reserve, output_reserve)
    }

    /// Tokens that [`Dex::eth_to_token`] would pay for `native_in` now.
    ///
    /// # Errors
    ///
    /// [`DexError::NotInitialized`] before `init`;
    /// [`DexError::InvalidReserves`] on a drained pool.
    pub fn quote_eth_to_token(&self, native_in: Amount) -> Result<Amount> {
        self.ensure_initialized()?;
        math::price(native_in, self.state.native_reserve, self.state.token_reserve)
    }

    /// Native units that [`Dex::token_to_eth`] would pay for `token_in`
    /// now.
    ///
    /// # Errors
    ///
    /// [`DexError::NotInitialized`] before `init`;
    /// [`DexError::InvalidReserves`] on a drained pool.
    pub fn quote_token_to_eth(&self, token_in: Amount) -> Result<Amount> {
        self.ensure_initialized()?;
        math::price(token_in, self.state.token_reserve, self.state.native_reserve)
    }

    /// Token requirement and shares minted for a deposit of `native_in`.
    ///
    /// # Errors
    ///
    /// [`DexError::NotInitialized`] before `init`;
    /// [`DexError::InvalidReserves`] on a drained pool;
    /// [`DexError::Overflow`] if the amounts do not fit.
    pub fn quote_deposit(&self, native_in: Amount) -> Result<DepositQuote> {
        self.ensure_initialized()?;
        math::quote_deposit(
            native_in,
            self.state.native_reserve,
            self.state.token_reserve,
            self.state.total_liquidity,
        )
    }

    /// Payouts for burning `liquidity` shares.
    ///
    /// # Errors
    ///
    /// [`DexError::NotInitialized`] before `init`;
    /// [`DexError::InvalidReserves`] once every share is burned;
    /// [`DexError::InsufficientShares`] if `liquidity` exceeds the supply.
    pub fn quote_withdraw(&self, liquidity: Liquidity) -> Result<WithdrawQuote> {
        self.ensure_initialized()?;
        math::quote_withdraw(
            liquidity,
            self.state.native_reserve,
            self.state.token_reserve,
            self.state.total_liquidity,
        )
    }

    // -- safety gate ------------------------------------------------------------

    /// Sets or clears the emergency stop. Owner only.
    ///
    /// Allowed in any state, including before `init`.
    ///
    /// # Errors
    ///
    /// - [`DexError::NotPayable`] if native value is attached.
    /// - [`DexError::Unauthorized`] if the caller is not the owner.
    pub fn set_emergency_stop(&mut self, call: &CallContext, flag: bool) -> Result<EmergencyStopSet> {
        let record = self.transact(call, "set_emergency_stop", |dex, _| {
            ensure_not_payable(call)?;
            dex.gate.set(&call.sender(), flag)?;
            Ok(EmergencyStopSet { flag })
        })?;
        self.emit(record);
        Ok(record)
    }

    // -- transaction plumbing -----------------------------------------------------

    fn ensure_initialized(&self) -> Result<()> {
        if !self.state.initialized {
            return Err(DexError::NotInitialized);
        }
        Ok(())
    }

    /// Runs `op` as one all-or-nothing call on behalf of `call.sender()`.
    fn transact<R>(
        &mut self,
        call: &CallContext,
        name: &'static str,
        op: impl FnOnce(&mut Self, &mut Journal) -> Result<R>,
    ) -> Result<R> {
        let caller = call.sender();
        if caller == self.account {
            warn!("{name} refused: caller is the pool account {caller}");
            return Err(DexError::PoolAccountCaller);
        }
        let checkpoint = self.state.checkpoint(caller);
        trace!("{name} by {caller}: checkpoint {checkpoint:?}");
        let mut journal = Journal::default();
        match op(self, &mut journal) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.state.restore(checkpoint);
                if journal.is_empty() {
                    if matches!(err, DexError::EmergencyStopActive | DexError::Unauthorized) {
                        warn!("{name} by {caller} refused by safety gate: {err}");
                    } else {
                        debug!("{name} by {caller} rejected: {err}");
                    }
                    return Err(err);
                }
                warn!("{name} by {caller} rolled back: {err}");
                if let Err(unwind_err) = journal.unwind(&mut self.native, &mut self.token) {
                    log::error!("{name} by {caller}: {unwind_err} after {err}");
                    return Err(unwind_err);
                }
                Err(err)
            }
        }
    }

    fn emit(&mut self, record: impl Into<DexEvent>) {
        let event = record.into();
        log::info!("{event}");
        self.events.push(event);
    }
}

/// Rejects native value attached to a non-payable call.
fn ensure_not_payable(call: &CallContext) -> Result<()> {
    if !call.value().is_zero() {
        return Err(DexError::NotPayable);
    }
    Ok(())
}

/// Rejects a payable call that carries no value.
fn ensure_positive(amount: Amount) -> Result<()> {
    if amount.is_zero() {
        return Err(DexError::ZeroAmount);
    }
    Ok(())
}
