//! Domain value types used throughout the exchange.
//!
//! Amounts, shares, account identities, the per-call context and the event
//! records.  All numeric types are `u128` newtypes with checked arithmetic.

mod address;
mod amount;
mod call;
mod events;
mod liquidity;
mod rounding;

pub use address::Address;
pub use amount::Amount;
pub use call::CallContext;
pub use events::{
    DexEvent, EmergencyStopSet, EthToTokenSwap, LiquidityProvided, LiquidityRemoved,
    PoolInitialized, TokenToEthSwap,
};
pub use liquidity::Liquidity;
pub use rounding::Rounding;
