//! Swap entry points.

use super::{ensure_not_payable, ensure_positive, Dex};
use crate::domain::{Amount, CallContext, EthToTokenSwap, TokenToEthSwap};
use crate::error::{DexError, Result};
use crate::math::{self, CheckedArithmetic};
use crate::traits::{Ledger, TokenLedger};

impl<N: Ledger, T: TokenLedger> Dex<N, T> {
    /// Sells the native value attached to `call` for tokens.
    ///
    /// The output is priced against the reserves before the trade.
    ///
    /// # Errors
    ///
    /// - [`DexError::EmergencyStopActive`] while stopped.
    /// - [`DexError::NotInitialized`] before `init`.
    /// - [`DexError::ZeroAmount`] if no value is attached.
    /// - [`DexError::InvalidReserves`] if either reserve is zero.
    /// - [`DexError::InsufficientOutput`] if the trade would pay nothing.
    /// - Ledger failures moving the native input.
    pub fn eth_to_token(&mut self, call: &CallContext) -> Result<EthToTokenSwap> {
        let record = self.transact(call, "eth_to_token", |dex, journal| {
            dex.gate.ensure_active()?;
            dex.ensure_initialized()?;
            let native_in = call.value();
            ensure_positive(native_in)?;

            let token_out = math::price(
                native_in,
                dex.state.native_reserve,
                dex.state.token_reserve,
            )?;
            if token_out.is_zero() {
                return Err(DexError::InsufficientOutput);
            }

            dex.state.native_reserve = dex
                .state
                .native_reserve
                .safe_add(&native_in, "native reserve")?;
            dex.state.token_reserve = dex
                .state
                .token_reserve
                .safe_sub(&token_out, "token reserve")?;

            let caller = call.sender();
            journal.move_native(&mut dex.native, caller, dex.account, native_in)?;
            journal.move_token(&mut dex.token, dex.account, caller, token_out)?;

            Ok(EthToTokenSwap {
                caller,
                token_out,
                native_in,
            })
        })?;
        self.emit(record);
        Ok(record)
    }

    /// Sells `token_in` tokens, pulled from the caller's allowance, for
    /// native units.
    ///
    /// # Errors
    ///
    /// - [`DexError::NotPayable`] if native value is attached.
    /// - [`DexError::EmergencyStopActive`] while stopped.
    /// - [`DexError::NotInitialized`] before `init`.
    /// - [`DexError::ZeroAmount`] if `token_in` is zero.
    /// - [`DexError::InvalidReserves`] if either reserve is zero.
    /// - [`DexError::InsufficientOutput`] if the trade would pay nothing.
    /// - [`DexError::InsufficientAllowance`] or
    ///   [`DexError::InsufficientBalance`] if the token pull fails.
    pub fn token_to_eth(&mut self, call: &CallContext, token_in: Amount) -> Result<TokenToEthSwap> {
        let record = self.transact(call, "token_to_eth", |dex, journal| {
            ensure_not_payable(call)?;
            dex.gate.ensure_active()?;
            dex.ensure_initialized()?;
            ensure_positive(token_in)?;

            let native_out = math::price(
                token_in,
                dex.state.token_reserve,
                dex.state.native_reserve,
            )?;
            if native_out.is_zero() {
                return Err(DexError::InsufficientOutput);
            }

            dex.state.token_reserve = dex
                .state
                .token_reserve
                .safe_add(&token_in, "token reserve")?;
            dex.state.native_reserve = dex
                .state
                .native_reserve
                .safe_sub(&native_out, "native reserve")?;

            let caller = call.sender();
            journal.pull_token(&mut dex.token, dex.account, caller, token_in)?;
            journal.move_native(&mut dex.native, dex.account, caller, native_out)?;

            Ok(TokenToEthSwap {
                caller,
                token_in,
                native_out,
            })
        })?;
        self.emit(record);
        Ok(record)
    }
}
