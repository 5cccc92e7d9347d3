//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Price bounds**: output stays below the output reserve.
//! 2. **Price monotonicity**: more input never buys less.
//! 3. **Share conservation**: holder balances always sum to the total.
//! 4. **Swap conservation**: reserves move by exactly the traded amounts
//!    and the reserve product grows.
//! 5. **Liquidity round trip**: deposit then withdraw never profits.
//! 6. **Failure atomicity**: a rejected call changes nothing.

use proptest::prelude::*;

use super::test_support::{funded_dex, pay, TestDex, ALICE, BOB, OWNER, POOL};
use crate::domain::{Address, Amount, CallContext, Liquidity};
use crate::math::{price, widen};
use crate::traits::Ledger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDS: u128 = 1_000_000_000_000;

fn seeded(native: u128, token: u128) -> TestDex {
    let mut dex = funded_dex(FUNDS);
    let Ok(_) = dex.init(&pay(OWNER, native), Amount::new(token)) else {
        panic!("valid init");
    };
    dex
}

fn share_sum(dex: &TestDex) -> u128 {
    dex.liquidity_holders().map(|(_, l)| l.get()).sum()
}

/// Both reserves must match what the pool account actually holds.
fn reserves_backed(dex: &TestDex) -> bool {
    dex.native_ledger().balance_of(&POOL) == dex.native_reserve()
        && dex.token_ledger().balance_of(&POOL) == dex.token_reserve()
}

#[derive(Debug, Clone, Copy)]
enum Op {
    BuyTokens(Address, u128),
    SellTokens(Address, u128),
    Deposit(Address, u128),
    /// Withdraw this many per-mille of the caller's shares.
    Withdraw(Address, u128),
}

fn apply(dex: &mut TestDex, op: Op) {
    let _ = match op {
        Op::BuyTokens(who, v) => dex.eth_to_token(&pay(who, v)).map(|_| ()),
        Op::SellTokens(who, v) => dex
            .token_to_eth(&CallContext::new(who), Amount::new(v))
            .map(|_| ()),
        Op::Deposit(who, v) => dex.deposit(&pay(who, v)).map(|_| ()),
        Op::Withdraw(who, per_mille) => {
            let held = dex.liquidity_of(&who).get();
            let amount = Liquidity::new(held / 1_000 * per_mille);
            dex.withdraw(&CallContext::new(who), amount).map(|_| ())
        }
    };
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1_000, 1_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000u128
}

fn actor_strategy() -> impl Strategy<Value = Address> {
    prop_oneof![Just(OWNER), Just(ALICE), Just(BOB)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (actor_strategy(), 1u128..=10_000_000).prop_map(|(a, v)| Op::BuyTokens(a, v)),
        (actor_strategy(), 1u128..=10_000_000).prop_map(|(a, v)| Op::SellTokens(a, v)),
        (actor_strategy(), 1u128..=10_000_000).prop_map(|(a, v)| Op::Deposit(a, v)),
        (actor_strategy(), 1u128..=1_000).prop_map(|(a, v)| Op::Withdraw(a, v)),
    ]
}

// ---------------------------------------------------------------------------
// Properties 1-2: Pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_price_below_output_reserve(
        x in 1u128..=u128::MAX,
        r_in in 1u128..=u128::MAX,
        r_out in 1u128..=u128::MAX,
    ) {
        let Ok(out) = price(Amount::new(x), Amount::new(r_in), Amount::new(r_out)) else {
            panic!("positive reserves must price");
        };
        prop_assert!(out.get() < r_out, "output {} reached reserve {}", out, r_out);
    }

    #[test]
    fn prop_price_monotonic_in_input(
        x in 0u128..=u128::MAX / 2,
        dx in 0u128..=u128::MAX / 2,
        r_in in 1u128..=u128::MAX,
        r_out in 1u128..=u128::MAX,
    ) {
        let (Ok(small), Ok(large)) = (
            price(Amount::new(x), Amount::new(r_in), Amount::new(r_out)),
            price(Amount::new(x + dx), Amount::new(r_in), Amount::new(r_out)),
        ) else {
            panic!("positive reserves must price");
        };
        prop_assert!(large >= small, "price fell: {} < {}", large, small);
    }
}

// ---------------------------------------------------------------------------
// Properties 3-4: Share and swap conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shares_sum_to_total(
        native in reserve_strategy(),
        token in reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let mut dex = seeded(native, token);
        for op in ops {
            apply(&mut dex, op);
            prop_assert_eq!(share_sum(&dex), dex.total_liquidity().get());
            prop_assert!(reserves_backed(&dex), "reserves diverged after {:?}", op);
        }
    }

    #[test]
    fn prop_swap_moves_reserves_exactly(
        native in reserve_strategy(),
        token in reserve_strategy(),
        input in 1u128..=10_000_000,
    ) {
        let mut dex = seeded(native, token);
        let k_before = widen(native) * widen(token);
        let Ok(expected) = price(Amount::new(input), Amount::new(native), Amount::new(token)) else {
            panic!("positive reserves must price");
        };
        if expected.is_zero() {
            return Ok(());
        }
        let Ok(swap) = dex.eth_to_token(&pay(ALICE, input)) else {
            panic!("funded swap must succeed");
        };
        prop_assert_eq!(swap.token_out, expected);
        prop_assert_eq!(dex.native_reserve().get(), native + input);
        prop_assert_eq!(dex.token_reserve().get(), token - expected.get());
        let k_after = widen(dex.native_reserve().get()) * widen(dex.token_reserve().get());
        prop_assert!(k_after > k_before, "product did not grow");
    }
}

// ---------------------------------------------------------------------------
// Properties 5-6: Liquidity round trip and atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_never_profits(
        native in reserve_strategy(),
        token in reserve_strategy(),
        deposit in 1u128..=10_000_000,
    ) {
        let mut dex = seeded(native, token);
        let Ok(provided) = dex.deposit(&pay(ALICE, deposit)) else {
            return Ok(());
        };
        let Ok(removed) = dex.withdraw(&CallContext::new(ALICE), provided.liquidity_minted) else {
            return Ok(());
        };
        prop_assert!(removed.native_out <= provided.native_in);
        prop_assert!(removed.token_out <= provided.token_required);
        prop_assert!(dex.native_reserve().get() >= native);
        prop_assert!(dex.token_reserve().get() >= token);
        prop_assert_eq!(dex.liquidity_of(&ALICE), Liquidity::ZERO);
    }

    #[test]
    fn prop_excess_withdraw_changes_nothing(
        native in reserve_strategy(),
        token in reserve_strategy(),
        extra in 1u128..=1_000,
    ) {
        let mut dex = seeded(native, token);
        let before = dex.clone();
        let excess = Liquidity::new(native + extra);
        prop_assert!(dex.withdraw(&CallContext::new(OWNER), excess).is_err());
        prop_assert_eq!(dex.total_liquidity(), before.total_liquidity());
        prop_assert_eq!(dex.native_reserve(), before.native_reserve());
        prop_assert_eq!(dex.token_reserve(), before.token_reserve());
        prop_assert_eq!(dex.native_ledger(), before.native_ledger());
        prop_assert_eq!(dex.token_ledger(), before.token_ledger());
        prop_assert_eq!(dex.events(), before.events());
    }
}
