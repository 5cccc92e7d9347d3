//! Journal of external effects performed during one call.
//!
//! Every asset movement a call makes goes through the [`Journal`], which
//! records how to undo it.  If a later step fails, [`Journal::unwind`]
//! replays the inverses newest-first, so the ledgers end up exactly where
//! they were before the call.

use log::error;

use crate::domain::{Address, Amount};
use crate::error::{DexError, Result};
use crate::traits::{Ledger, TokenLedger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Native {
        from: Address,
        to: Address,
        amount: Amount,
    },
    Token {
        from: Address,
        to: Address,
        amount: Amount,
    },
    Allowance {
        owner: Address,
        spender: Address,
        previous: Amount,
    },
}

#[derive(Debug, Default)]
pub(crate) struct Journal {
    effects: Vec<Effect>,
}

impl Journal {
    pub(crate) fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Moves native units and records the movement.
    pub(crate) fn move_native<N: Ledger>(
        &mut self,
        native: &mut N,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        native.transfer(from, to, amount)?;
        self.effects.push(Effect::Native { from, to, amount });
        Ok(())
    }

    /// Pays tokens out of `from` (the pool) and records the movement.
    pub(crate) fn move_token<T: TokenLedger>(
        &mut self,
        token: &mut T,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        token.transfer(from, to, amount)?;
        self.effects.push(Effect::Token { from, to, amount });
        Ok(())
    }

    /// Pulls tokens from `from` into `spender` using `from`'s allowance,
    /// recording both the movement and the allowance it consumed.
    pub(crate) fn pull_token<T: TokenLedger>(
        &mut self,
        token: &mut T,
        spender: Address,
        from: Address,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let previous = token.allowance(&from, &spender);
        token.transfer_from(spender, from, spender, amount)?;
        self.effects.push(Effect::Allowance {
            owner: from,
            spender,
            previous,
        });
        self.effects.push(Effect::Token {
            from,
            to: spender,
            amount,
        });
        Ok(())
    }

    /// Reverses every recorded effect, newest first.
    ///
    /// An inverse that the ledger refuses is logged and skipped, and the
    /// remaining inverses still run.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::RollbackIncomplete`] if any inverse was refused.
    pub(crate) fn unwind<N: Ledger, T: TokenLedger>(self, native: &mut N, token: &mut T) -> Result<()> {
        let mut complete = true;
        for effect in self.effects.into_iter().rev() {
            match effect {
                Effect::Native { from, to, amount } => {
                    if let Err(err) = native.transfer(to, from, amount) {
                        error!("failed to return {amount} native from {to} to {from}: {err}");
                        complete = false;
                    }
                }
                Effect::Token { from, to, amount } => {
                    if let Err(err) = token.transfer(to, from, amount) {
                        error!("failed to return {amount} tokens from {to} to {from}: {err}");
                        complete = false;
                    }
                }
                Effect::Allowance {
                    owner,
                    spender,
                    previous,
                } => token.approve(owner, spender, previous),
            }
        }
        if complete {
            Ok(())
        } else {
            Err(DexError::RollbackIncomplete)
        }
    }
}
