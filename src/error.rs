//! Unified error types for the exchange.
//!
//! Every fallible operation in the crate returns [`DexError`].  Ledger
//! collaborators report their own [`LedgerError`], which converts into the
//! matching `DexError` variant so callers see a single flat taxonomy.
//!
//! A returned error means the whole call was rolled back: no reserve,
//! share or ledger effect of the failed call survives.  The one exception
//! is [`DexError::RollbackIncomplete`], raised when a ledger refuses to
//! undo an effect.

use thiserror::Error;

/// Errors raised by pool operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DexError {
    /// `init` was called on a pool that already holds liquidity.
    #[error("pool is already initialized")]
    AlreadyInitialized,

    /// A trading or liquidity call was made before `init`.
    #[error("pool is not initialized")]
    NotInitialized,

    /// A reserve involved in pricing or share math is zero.
    #[error("invalid reserves")]
    InvalidReserves,

    /// The caller tried to burn more shares than they hold (or zero).
    #[error("insufficient liquidity shares")]
    InsufficientShares,

    /// The ledger refused to move tokens for lack of allowance.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The ledger refused to move assets for lack of balance.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// A non-owner called an owner-only operation.
    #[error("caller is not the owner")]
    Unauthorized,

    /// A gated operation was called while the emergency stop is active.
    #[error("emergency stop is active")]
    EmergencyStopActive,

    /// A swap or deposit was called with a zero input.
    #[error("input amount must be positive")]
    ZeroAmount,

    /// The operation would hand the caller nothing in return.
    #[error("operation yields zero output")]
    InsufficientOutput,

    /// Native value was attached to a non-payable call.
    #[error("call does not accept native value")]
    NotPayable,

    /// The pool's own account tried to call into the pool.
    #[error("pool account cannot call its own pool")]
    PoolAccountCaller,

    /// A ledger refused an inverse transfer while undoing a failed call,
    /// so balances may not match their state before the call.
    #[error("rollback incomplete: ledger refused a compensating transfer")]
    RollbackIncomplete,

    /// An intermediate or final value exceeds the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// The pool configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Errors reported by a [`Ledger`](crate::traits::Ledger) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LedgerError {
    /// The spender's allowance does not cover the transfer.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The source account's balance does not cover the transfer.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// Crediting the destination would overflow its balance.
    #[error("balance overflow")]
    Overflow,
}

impl From<LedgerError> for DexError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientAllowance => Self::InsufficientAllowance,
            LedgerError::InsufficientBalance => Self::InsufficientBalance,
            LedgerError::Overflow => Self::Overflow("ledger balance overflow"),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DexError>;
