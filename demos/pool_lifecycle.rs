//! Full pool lifecycle: seed, trade both ways, provide and remove
//! liquidity, then trip the emergency stop.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=info cargo run --example pool_lifecycle
//! ```

use cpmm_dex::prelude::*;

const ETHER: u128 = 1_000_000_000_000_000_000;

fn ether(n: u128) -> Amount {
    Amount::new(n * ETHER)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Constant Product DEX ===\n");

    // ── 1. Accounts and ledgers ─────────────────────────────────────────
    let owner = Address::from_bytes([0x01; 32]);
    let alice = Address::from_bytes([0x02; 32]);
    let bob = Address::from_bytes([0x03; 32]);
    let pool = Address::from_bytes([0xd0; 32]);

    let mut native = MemoryLedger::new(Address::from_bytes([0xe0; 32]));
    let mut balloons = MemoryLedger::new(Address::from_bytes([0xb0; 32]));
    for who in [owner, alice, bob] {
        native.mint(who, ether(100))?;
        balloons.mint(who, ether(100))?;
        balloons.approve(who, pool, Amount::MAX);
    }

    // ── 2. Deploy and seed ──────────────────────────────────────────────
    let mut dex = Dex::new(DexConfig::new(owner, pool)?, native, balloons)?;
    let seeded = dex.init(&CallContext::new(owner).with_value(ether(10)), ether(10))?;
    println!(
        "Seeded with {} native + {} tokens, {} shares to {}",
        seeded.native_in, seeded.token_in, seeded.liquidity_minted, seeded.caller
    );

    // ── 3. Trade both ways ──────────────────────────────────────────────
    let quote = dex.quote_eth_to_token(ether(1))?;
    let buy = dex.eth_to_token(&CallContext::new(alice).with_value(ether(1)))?;
    println!("Alice: quoted {quote}, received {} tokens", buy.token_out);

    let sell = dex.token_to_eth(&CallContext::new(bob), ether(1))?;
    println!("Bob: sold {} tokens for {} native", sell.token_in, sell.native_out);
    println!(
        "Reserves: {} native / {} tokens\n",
        dex.native_reserve(),
        dex.token_reserve()
    );

    // ── 4. Liquidity ────────────────────────────────────────────────────
    let provided = dex.deposit(&CallContext::new(alice).with_value(ether(2)))?;
    println!(
        "Alice deposited {} native + {} tokens for {} shares",
        provided.native_in, provided.token_required, provided.liquidity_minted
    );

    let removed = dex.withdraw(&CallContext::new(alice), provided.liquidity_minted)?;
    println!(
        "Alice withdrew {} native + {} tokens",
        removed.native_out, removed.token_out
    );
    for (holder, shares) in dex.liquidity_holders() {
        println!("  holder {holder}: {shares} shares");
    }

    // ── 5. Emergency stop ───────────────────────────────────────────────
    dex.set_emergency_stop(&CallContext::new(owner), true)?;
    match dex.eth_to_token(&CallContext::new(bob).with_value(ether(1))) {
        Err(err) => println!("\nWhile stopped: {err}"),
        Ok(swap) => println!("\nUnexpected swap while stopped: {}", swap.token_out),
    }
    dex.set_emergency_stop(&CallContext::new(owner), false)?;

    println!("\nEvent log:");
    for event in dex.take_events() {
        println!("  {event}");
    }

    Ok(())
}
