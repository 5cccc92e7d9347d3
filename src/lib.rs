//! # CPMM DEX
//!
//! A single-pool constant-product exchange between a native asset and one
//! fungible token, with liquidity shares and an owner-controlled emergency
//! stop.
//!
//! Prices follow `x · y = k` with a 0.3% fee taken from the input side.
//! All intermediate products are computed in 512-bit arithmetic, so no
//! combination of `u128` amounts and reserves can overflow.
//!
//! The ledgers that hold balances are external collaborators, reached
//! through the [`Ledger`](traits::Ledger) and
//! [`TokenLedger`](traits::TokenLedger) traits.  An in-memory
//! implementation, [`MemoryLedger`](ledger::MemoryLedger), is provided.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for domain types, events and config |
//!
//! # Quick Start
//!
//! ```rust
//! use cpmm_dex::prelude::*;
//!
//! let owner = Address::from_bytes([1u8; 32]);
//! let pool = Address::from_bytes([2u8; 32]);
//! let trader = Address::from_bytes([3u8; 32]);
//!
//! // 1. Fund the participants on both ledgers
//! let mut native = MemoryLedger::new(Address::from_bytes([10u8; 32]));
//! let mut token = MemoryLedger::new(Address::from_bytes([11u8; 32]));
//! native.mint(owner, Amount::new(1_000_000)).expect("mint");
//! native.mint(trader, Amount::new(10_000)).expect("mint");
//! token.mint(owner, Amount::new(2_000_000)).expect("mint");
//! token.approve(owner, pool, Amount::new(2_000_000));
//!
//! // 2. Create and seed the pool
//! let config = DexConfig::new(owner, pool).expect("valid config");
//! let mut dex = Dex::new(config, native, token).expect("pool created");
//! let seed = CallContext::new(owner).with_value(Amount::new(1_000_000));
//! dex.init(&seed, Amount::new(2_000_000)).expect("init");
//!
//! // 3. Buy tokens with 1 000 native units
//! let buy = CallContext::new(trader).with_value(Amount::new(1_000));
//! let swap = dex.eth_to_token(&buy).expect("swap");
//! assert_eq!(swap.token_out, Amount::new(1_992));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  CallContext { sender, value }
//! └──────┬───────┘
//!        │ init / eth_to_token / token_to_eth / deposit / withdraw
//!        ▼
//! ┌──────────────┐
//! │     Dex       │  safety gate, reserves, share ledger, event log
//! └──────┬───────┘
//!        │ checks → effects → journaled transfers
//!        ▼
//! ┌──────────────┐
//! │   Ledgers     │  Ledger (native) + TokenLedger (allowances)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Address`](domain::Address), events |
//! | [`math`] | Pricing function, share math, 512-bit helpers |
//! | [`config`] | [`DexConfig`](config::DexConfig) |
//! | [`traits`] | Ledger seams |
//! | [`ledger`] | [`MemoryLedger`](ledger::MemoryLedger) |
//! | [`pool`] | [`Dex`](pool::Dex), the exchange itself |
//! | [`error`] | [`DexError`](error::DexError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
