//! Initialization and proportional liquidity provision.

use super::{ensure_not_payable, ensure_positive, Dex};
use crate::domain::{
    Amount, CallContext, Liquidity, LiquidityProvided, LiquidityRemoved, PoolInitialized,
};
use crate::error::{DexError, Result};
use crate::math::{self, CheckedArithmetic};
use crate::traits::{Ledger, TokenLedger};

impl<N: Ledger, T: TokenLedger> Dex<N, T> {
    /// Seeds the pool with the attached native value and `token_amount`
    /// tokens pulled from the caller.
    ///
    /// The caller receives one share per native unit supplied.  May be
    /// called by any account, once.
    ///
    /// # Errors
    ///
    /// - [`DexError::AlreadyInitialized`] on any later call, stopped or not.
    /// - [`DexError::EmergencyStopActive`] while stopped.
    /// - [`DexError::InvalidReserves`] if either seed amount is zero.
    /// - Ledger failures moving either asset.
    pub fn init(&mut self, call: &CallContext, token_amount: Amount) -> Result<PoolInitialized> {
        let record = self.transact(call, "init", |dex, journal| {
            if dex.state.initialized {
                return Err(DexError::AlreadyInitialized);
            }
            dex.gate.ensure_active()?;
            let native_in = call.value();
            if native_in.is_zero() || token_amount.is_zero() {
                return Err(DexError::InvalidReserves);
            }

            let caller = call.sender();
            let liquidity_minted = Liquidity::new(native_in.get());
            dex.state.native_reserve = native_in;
            dex.state.token_reserve = token_amount;
            dex.state.initialized = true;
            dex.state.mint_shares(caller, liquidity_minted)?;

            journal.move_native(&mut dex.native, caller, dex.account, native_in)?;
            journal.pull_token(&mut dex.token, dex.account, caller, token_amount)?;

            Ok(PoolInitialized {
                caller,
                liquidity_minted,
                native_in,
                token_in: token_amount,
            })
        })?;
        self.emit(record);
        Ok(record)
    }

    /// Adds the attached native value and the matching token amount at the
    /// current reserve ratio.
    ///
    /// The token requirement rounds up and the shares minted round down.
    ///
    /// # Errors
    ///
    /// - [`DexError::EmergencyStopActive`] while stopped.
    /// - [`DexError::NotInitialized`] before `init`.
    /// - [`DexError::ZeroAmount`] if no value is attached.
    /// - [`DexError::InvalidReserves`] once the pool has been drained.
    /// - [`DexError::InsufficientOutput`] if the deposit would mint no shares.
    /// - [`DexError::InsufficientAllowance`] or
    ///   [`DexError::InsufficientBalance`] if the token pull fails.
    pub fn deposit(&mut self, call: &CallContext) -> Result<LiquidityProvided> {
        let record = self.transact(call, "deposit", |dex, journal| {
            dex.gate.ensure_active()?;
            dex.ensure_initialized()?;
            let native_in = call.value();
            ensure_positive(native_in)?;

            let quote = math::quote_deposit(
                native_in,
                dex.state.native_reserve,
                dex.state.token_reserve,
                dex.state.total_liquidity,
            )?;
            if quote.liquidity_minted.is_zero() {
                return Err(DexError::InsufficientOutput);
            }

            let caller = call.sender();
            dex.state.native_reserve = dex
                .state
                .native_reserve
                .safe_add(&native_in, "native reserve")?;
            dex.state.token_reserve = dex
                .state
                .token_reserve
                .safe_add(&quote.token_required, "token reserve")?;
            dex.state.mint_shares(caller, quote.liquidity_minted)?;

            journal.move_native(&mut dex.native, caller, dex.account, native_in)?;
            journal.pull_token(&mut dex.token, dex.account, caller, quote.token_required)?;

            Ok(LiquidityProvided {
                caller,
                liquidity_minted: quote.liquidity_minted,
                native_in,
                token_required: quote.token_required,
            })
        })?;
        self.emit(record);
        Ok(record)
    }

    /// Burns `liquidity_amount` of the caller's shares for a proportional
    /// slice of both reserves, rounded down.
    ///
    /// # Errors
    ///
    /// - [`DexError::NotPayable`] if native value is attached.
    /// - [`DexError::EmergencyStopActive`] while stopped.
    /// - [`DexError::NotInitialized`] before `init`.
    /// - [`DexError::InsufficientShares`] if `liquidity_amount` is zero or
    ///   exceeds the caller's shares.
    /// - [`DexError::InsufficientOutput`] if both payouts round to zero.
    pub fn withdraw(
        &mut self,
        call: &CallContext,
        liquidity_amount: Liquidity,
    ) -> Result<LiquidityRemoved> {
        let record = self.transact(call, "withdraw", |dex, journal| {
            ensure_not_payable(call)?;
            dex.gate.ensure_active()?;
            dex.ensure_initialized()?;

            let caller = call.sender();
            if liquidity_amount.is_zero() || liquidity_amount > dex.state.shares_of(&caller) {
                return Err(DexError::InsufficientShares);
            }

            let quote = math::quote_withdraw(
                liquidity_amount,
                dex.state.native_reserve,
                dex.state.token_reserve,
                dex.state.total_liquidity,
            )?;
            if quote.native_out.is_zero() && quote.token_out.is_zero() {
                return Err(DexError::InsufficientOutput);
            }

            dex.state.native_reserve = dex
                .state
                .native_reserve
                .safe_sub(&quote.native_out, "native reserve")?;
            dex.state.token_reserve = dex
                .state
                .token_reserve
                .safe_sub(&quote.token_out, "token reserve")?;
            dex.state.burn_shares(caller, liquidity_amount)?;

            journal.move_native(&mut dex.native, dex.account, caller, quote.native_out)?;
            journal.move_token(&mut dex.token, dex.account, caller, quote.token_out)?;

            Ok(LiquidityRemoved {
                caller,
                liquidity_amount,
                native_out: quote.native_out,
                token_out: quote.token_out,
            })
        })?;
        self.emit(record);
        Ok(record)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::test_support::*;
    use crate::domain::{Amount, CallContext, DexEvent, Liquidity};
    use crate::error::DexError;
    use crate::traits::{Ledger, TokenLedger};

    const E: u128 = 1_000_000_000_000_000_000;

    fn share_sum(dex: &TestDex) -> u128 {
        dex.liquidity_holders().map(|(_, l)| l.get()).sum()
    }

    // -- init -------------------------------------------------------------------

    #[test]
    fn init_mints_one_share_per_native_unit() {
        let mut dex = funded_dex(100 * E);
        let Ok(record) = dex.init(&pay(OWNER, 5 * E), Amount::new(5 * E)) else {
            panic!("expected init");
        };
        assert_eq!(record.liquidity_minted, Liquidity::new(5 * E));
        assert!(dex.is_initialized());
        assert_eq!(dex.total_liquidity(), Liquidity::new(5 * E));
        assert_eq!(dex.liquidity_of(&OWNER), Liquidity::new(5 * E));
        assert_eq!(dex.native_reserve(), Amount::new(5 * E));
        assert_eq!(dex.token_reserve(), Amount::new(5 * E));
        assert_eq!(dex.native_ledger().balance_of(&POOL), Amount::new(5 * E));
        assert_eq!(dex.token_ledger().balance_of(&POOL), Amount::new(5 * E));
        assert_eq!(dex.events(), &[DexEvent::PoolInitialized(record)]);
    }

    #[test]
    fn second_init_fails() {
        let mut dex = seeded_dex(100, 10, 10);
        assert_eq!(
            dex.init(&pay(ALICE, 10), Amount::new(10)),
            Err(DexError::AlreadyInitialized)
        );
        assert_eq!(dex.total_liquidity(), Liquidity::new(10));
    }

    #[test]
    fn already_initialized_wins_over_emergency_stop() {
        let mut dex = seeded_dex(100, 10, 10);
        assert!(dex.set_emergency_stop(&CallContext::new(OWNER), true).is_ok());
        assert_eq!(
            dex.init(&pay(ALICE, 10), Amount::new(10)),
            Err(DexError::AlreadyInitialized)
        );
    }

    #[test]
    fn init_is_gated_by_emergency_stop() {
        let mut dex = funded_dex(100);
        assert!(dex.set_emergency_stop(&CallContext::new(OWNER), true).is_ok());
        assert_eq!(
            dex.init(&pay(ALICE, 10), Amount::new(10)),
            Err(DexError::EmergencyStopActive)
        );
        assert!(!dex.is_initialized());
    }

    #[test]
    fn init_rejects_empty_side() {
        let mut dex = funded_dex(100);
        assert_eq!(
            dex.init(&pay(ALICE, 0), Amount::new(10)),
            Err(DexError::InvalidReserves)
        );
        assert_eq!(
            dex.init(&pay(ALICE, 10), Amount::ZERO),
            Err(DexError::InvalidReserves)
        );
        assert!(!dex.is_initialized());
    }

    #[test]
    fn failed_init_pull_returns_native() {
        let mut dex = funded_dex(100);
        dex.token_ledger_mut().approve(ALICE, POOL, Amount::ZERO);
        assert_eq!(
            dex.init(&pay(ALICE, 10), Amount::new(10)),
            Err(DexError::InsufficientAllowance)
        );
        assert!(!dex.is_initialized());
        assert_eq!(dex.total_liquidity(), Liquidity::ZERO);
        assert_eq!(dex.liquidity_of(&ALICE), Liquidity::ZERO);
        assert_eq!(dex.native_ledger().balance_of(&ALICE), Amount::new(100));
        assert_eq!(dex.native_ledger().balance_of(&POOL), Amount::ZERO);
        assert!(dex.events().is_empty());
    }

    // -- deposit ----------------------------------------------------------------

    #[test]
    fn deposit_keeps_ratio_and_mints_proportionally() {
        let mut dex = seeded_dex(100 * E, 10 * E, 5 * E);
        let Ok(record) = dex.deposit(&pay(ALICE, 2 * E)) else {
            panic!("expected deposit");
        };
        assert_eq!(record.token_required, Amount::new(E));
        assert_eq!(record.liquidity_minted, Liquidity::new(2 * E));
        assert_eq!(dex.native_reserve(), Amount::new(12 * E));
        assert_eq!(dex.token_reserve(), Amount::new(6 * E));
        assert_eq!(dex.liquidity_of(&ALICE), Liquidity::new(2 * E));
        assert_eq!(dex.total_liquidity(), Liquidity::new(12 * E));
        assert_eq!(dex.token_ledger().balance_of(&ALICE).get(), 99 * E);
        assert_eq!(share_sum(&dex), dex.total_liquidity().get());
    }

    #[test]
    fn deposit_rounds_token_requirement_up() {
        // 1 * 10 / 3 = 3.33.. tokens, rounded up to 4; 1 * 3 / 3 = 1 share.
        let mut dex = seeded_dex(1_000, 3, 10);
        let Ok(record) = dex.deposit(&pay(ALICE, 1)) else {
            panic!("expected deposit");
        };
        assert_eq!(record.token_required, Amount::new(4));
        assert_eq!(record.liquidity_minted, Liquidity::new(1));
    }

    #[test]
    fn deposit_minting_nothing_is_rejected() {
        let mut dex = seeded_dex(1_000, 10, 10);
        // Native reserve grows to 510, so one unit mints 10 / 510 -> 0 shares.
        assert!(dex.eth_to_token(&pay(BOB, 500)).is_ok());
        assert_eq!(dex.native_reserve(), Amount::new(510));
        assert_eq!(dex.deposit(&pay(ALICE, 1)), Err(DexError::InsufficientOutput));
    }

    #[test]
    fn deposit_requires_value_and_initialization() {
        let mut dex = funded_dex(100);
        assert_eq!(dex.deposit(&pay(ALICE, 1)), Err(DexError::NotInitialized));
        assert_eq!(
            dex.withdraw(&CallContext::new(OWNER), Liquidity::new(1)),
            Err(DexError::NotInitialized)
        );
        let mut dex = seeded_dex(100, 10, 10);
        assert_eq!(dex.deposit(&pay(ALICE, 0)), Err(DexError::ZeroAmount));
    }

    #[test]
    fn failed_deposit_pull_rolls_back_everything() {
        let mut dex = seeded_dex(100 * E, 10 * E, 5 * E);
        dex.token_ledger_mut().approve(ALICE, POOL, Amount::new(E / 2));
        let native_before = dex.native_ledger().clone();
        let token_before = dex.token_ledger().clone();
        let total = dex.total_liquidity();

        assert_eq!(
            dex.deposit(&pay(ALICE, 2 * E)),
            Err(DexError::InsufficientAllowance)
        );
        assert_eq!(dex.native_ledger(), &native_before);
        assert_eq!(dex.token_ledger(), &token_before);
        assert_eq!(dex.total_liquidity(), total);
        assert_eq!(dex.liquidity_of(&ALICE), Liquidity::ZERO);
        assert_eq!(dex.native_reserve(), Amount::new(10 * E));
    }

    // -- withdraw ---------------------------------------------------------------

    #[test]
    fn withdraw_pays_proportional_slice() {
        let mut dex = seeded_dex(100 * E, 10 * E, 10 * E);
        let Ok(record) = dex.withdraw(&CallContext::new(OWNER), Liquidity::new(5 * E)) else {
            panic!("expected withdraw");
        };
        assert_eq!(record.native_out, Amount::new(5 * E));
        assert_eq!(record.token_out, Amount::new(5 * E));
        assert_eq!(dex.total_liquidity(), Liquidity::new(5 * E));
        assert_eq!(dex.liquidity_of(&OWNER), Liquidity::new(5 * E));
        assert_eq!(dex.native_ledger().balance_of(&OWNER).get(), 95 * E);
        assert_eq!(dex.token_ledger().balance_of(&OWNER).get(), 95 * E);
        assert_eq!(dex.events().last(), Some(&DexEvent::LiquidityRemoved(record)));
    }

    #[test]
    fn withdraw_more_than_held_changes_nothing() {
        let mut dex = seeded_dex(100, 10, 10);
        let total = dex.total_liquidity();
        let events = dex.events().len();
        assert_eq!(
            dex.withdraw(&CallContext::new(OWNER), Liquidity::new(11)),
            Err(DexError::InsufficientShares)
        );
        assert_eq!(
            dex.withdraw(&CallContext::new(ALICE), Liquidity::new(1)),
            Err(DexError::InsufficientShares)
        );
        assert_eq!(
            dex.withdraw(&CallContext::new(OWNER), Liquidity::ZERO),
            Err(DexError::InsufficientShares)
        );
        assert_eq!(dex.total_liquidity(), total);
        assert_eq!(dex.native_reserve(), Amount::new(10));
        assert_eq!(dex.events().len(), events);
    }

    #[test]
    fn withdraw_is_not_payable() {
        let mut dex = seeded_dex(100, 10, 10);
        assert_eq!(
            dex.withdraw(&pay(OWNER, 1), Liquidity::new(1)),
            Err(DexError::NotPayable)
        );
    }

    #[test]
    fn full_withdrawal_leaves_dead_pool() {
        let mut dex = seeded_dex(100, 10, 10);
        assert!(dex.withdraw(&CallContext::new(OWNER), Liquidity::new(10)).is_ok());
        assert_eq!(dex.total_liquidity(), Liquidity::ZERO);
        assert_eq!(dex.native_reserve(), Amount::ZERO);
        assert!(dex.is_initialized());
        assert_eq!(dex.eth_to_token(&pay(ALICE, 5)), Err(DexError::InvalidReserves));
        assert_eq!(dex.deposit(&pay(ALICE, 5)), Err(DexError::InvalidReserves));
        assert_eq!(
            dex.init(&pay(ALICE, 5), Amount::new(5)),
            Err(DexError::AlreadyInitialized)
        );
    }

    #[test]
    fn deposit_then_withdraw_never_profits() {
        let mut dex = seeded_dex(1_000_000, 7_919, 104_729);
        let native_start = dex.native_ledger().balance_of(&ALICE);
        let token_start = dex.token_ledger().balance_of(&ALICE);
        let Ok(provided) = dex.deposit(&pay(ALICE, 1_234)) else {
            panic!("expected deposit");
        };
        let Ok(removed) = dex.withdraw(&CallContext::new(ALICE), provided.liquidity_minted) else {
            panic!("expected withdraw");
        };
        assert!(removed.native_out <= provided.native_in);
        assert!(removed.token_out <= provided.token_required);
        assert!(dex.native_ledger().balance_of(&ALICE) <= native_start);
        assert!(dex.token_ledger().balance_of(&ALICE) <= token_start);
        assert_eq!(share_sum(&dex), dex.total_liquidity().get());
    }

    #[test]
    fn emergency_stop_blocks_liquidity_operations() {
        let mut dex = seeded_dex(100, 10, 10);
        assert!(dex.set_emergency_stop(&CallContext::new(OWNER), true).is_ok());
        assert_eq!(dex.deposit(&pay(ALICE, 5)), Err(DexError::EmergencyStopActive));
        assert_eq!(
            dex.withdraw(&CallContext::new(OWNER), Liquidity::new(5)),
            Err(DexError::EmergencyStopActive)
        );
    }

    #[test]
    fn pool_account_cannot_provide_or_remove_liquidity() {
        let mut dex = funded_dex(1_000);
        dex.token_ledger_mut().approve(POOL, POOL, Amount::MAX);
        assert_eq!(
            dex.init(&pay(POOL, 100), Amount::new(100)),
            Err(DexError::PoolAccountCaller)
        );
        assert!(!dex.is_initialized());

        let Ok(_) = dex.init(&pay(OWNER, 1_000), Amount::new(1_000)) else {
            panic!("expected init");
        };
        assert_eq!(dex.deposit(&pay(POOL, 500)), Err(DexError::PoolAccountCaller));
        assert_eq!(
            dex.withdraw(&CallContext::new(POOL), Liquidity::new(1)),
            Err(DexError::PoolAccountCaller)
        );
        assert_eq!(dex.native_reserve(), Amount::new(1_000));
        assert_eq!(dex.token_reserve(), Amount::new(1_000));
        assert_eq!(dex.liquidity_of(&POOL), Liquidity::ZERO);
        assert_eq!(dex.total_liquidity(), Liquidity::new(1_000));
        assert_eq!(dex.native_ledger().balance_of(&POOL), dex.native_reserve());
        assert_eq!(dex.token_ledger().balance_of(&POOL), dex.token_reserve());
    }
}
