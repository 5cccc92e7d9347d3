//! Records emitted by successful pool operations.
//!
//! Each mutating entry point returns its record to the caller and appends
//! the same record, wrapped in [`DexEvent`], to the pool's event log.  A
//! failed call emits nothing.

use core::fmt;

use super::{Address, Amount, Liquidity};

/// The pool was seeded with its first liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolInitialized {
    /// The initializing account.
    pub caller: Address,
    /// Shares minted to the initializer (equal to `native_in`).
    pub liquidity_minted: Liquidity,
    /// Native units supplied.
    pub native_in: Amount,
    /// Tokens supplied.
    pub token_in: Amount,
}

/// Native asset was sold for tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthToTokenSwap {
    /// The trader.
    pub caller: Address,
    /// Tokens paid out to the trader.
    pub token_out: Amount,
    /// Native units paid in.
    pub native_in: Amount,
}

/// Tokens were sold for native asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenToEthSwap {
    /// The trader.
    pub caller: Address,
    /// Tokens pulled from the trader.
    pub token_in: Amount,
    /// Native units paid out to the trader.
    pub native_out: Amount,
}

/// Liquidity was added in proportion to the current reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidityProvided {
    /// The depositor.
    pub caller: Address,
    /// Shares minted to the depositor.
    pub liquidity_minted: Liquidity,
    /// Native units supplied.
    pub native_in: Amount,
    /// Tokens pulled from the depositor.
    pub token_required: Amount,
}

/// Liquidity was burned for a proportional share of both reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidityRemoved {
    /// The withdrawing account.
    pub caller: Address,
    /// Shares burned.
    pub liquidity_amount: Liquidity,
    /// Native units paid out.
    pub native_out: Amount,
    /// Tokens paid out.
    pub token_out: Amount,
}

/// The owner changed the emergency stop flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmergencyStopSet {
    /// The new flag value.
    pub flag: bool,
}

/// Any record the pool can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DexEvent {
    /// See [`PoolInitialized`].
    PoolInitialized(PoolInitialized),
    /// See [`EthToTokenSwap`].
    EthToTokenSwap(EthToTokenSwap),
    /// See [`TokenToEthSwap`].
    TokenToEthSwap(TokenToEthSwap),
    /// See [`LiquidityProvided`].
    LiquidityProvided(LiquidityProvided),
    /// See [`LiquidityRemoved`].
    LiquidityRemoved(LiquidityRemoved),
    /// See [`EmergencyStopSet`].
    EmergencyStopSet(EmergencyStopSet),
}

macro_rules! impl_from_record {
    ($($record:ident),* $(,)?) => {
        $(
            impl From<$record> for DexEvent {
                fn from(record: $record) -> Self {
                    Self::$record(record)
                }
            }
        )*
    };
}

impl_from_record!(
    PoolInitialized,
    EthToTokenSwap,
    TokenToEthSwap,
    LiquidityProvided,
    LiquidityRemoved,
    EmergencyStopSet,
);

impl fmt::Display for DexEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolInitialized(e) => write!(
                f,
                "PoolInitialized(caller={}, liquidity={}, native_in={}, token_in={})",
                e.caller, e.liquidity_minted, e.native_in, e.token_in
            ),
            Self::EthToTokenSwap(e) => write!(
                f,
                "EthToTokenSwap(caller={}, token_out={}, native_in={})",
                e.caller, e.token_out, e.native_in
            ),
            Self::TokenToEthSwap(e) => write!(
                f,
                "TokenToEthSwap(caller={}, token_in={}, native_out={})",
                e.caller, e.token_in, e.native_out
            ),
            Self::LiquidityProvided(e) => write!(
                f,
                "LiquidityProvided(caller={}, minted={}, native_in={}, token_required={})",
                e.caller, e.liquidity_minted, e.native_in, e.token_required
            ),
            Self::LiquidityRemoved(e) => write!(
                f,
                "LiquidityRemoved(caller={}, burned={}, native_out={}, token_out={})",
                e.caller, e.liquidity_amount, e.native_out, e.token_out
            ),
            Self::EmergencyStopSet(e) => write!(f, "EmergencyStopSet(flag={})", e.flag),
        }
    }
}
