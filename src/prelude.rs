//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpmm_dex::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, CallContext, DexEvent, EmergencyStopSet, EthToTokenSwap, Liquidity,
    LiquidityProvided, LiquidityRemoved, PoolInitialized, Rounding, TokenToEthSwap,
};

pub use crate::traits::{Ledger, TokenLedger};

pub use crate::math::{price, CheckedArithmetic};

pub use crate::config::DexConfig;

pub use crate::error::{DexError, LedgerError, Result};

pub use crate::ledger::MemoryLedger;

pub use crate::pool::{Dex, GateState};
