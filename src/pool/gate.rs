//! Owner-controlled emergency stop.

use crate::domain::Address;
use crate::error::{DexError, Result};

/// Operating state of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateState {
    /// Trading and liquidity operations are allowed.
    #[default]
    Active,
    /// Every gated operation fails with [`DexError::EmergencyStopActive`].
    Stopped,
}

impl GateState {
    /// Maps the emergency-stop flag onto a state.
    #[must_use]
    pub const fn from_flag(stopped: bool) -> Self {
        if stopped {
            Self::Stopped
        } else {
            Self::Active
        }
    }

    /// Returns `true` when stopped.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// The owner identity and the circuit breaker it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SafetyGate {
    owner: Address,
    state: GateState,
}

impl SafetyGate {
    pub(crate) const fn new(owner: Address) -> Self {
        Self {
            owner,
            state: GateState::Active,
        }
    }

    pub(crate) const fn owner(&self) -> Address {
        self.owner
    }

    pub(crate) const fn state(&self) -> GateState {
        self.state
    }

    /// Fails unless the pool is [`GateState::Active`].
    pub(crate) fn ensure_active(&self) -> Result<()> {
        if self.state.is_stopped() {
            return Err(DexError::EmergencyStopActive);
        }
        Ok(())
    }

    /// Fails unless `caller` is the owner.
    pub(crate) fn ensure_owner(&self, caller: &Address) -> Result<()> {
        if *caller != self.owner {
            return Err(DexError::Unauthorized);
        }
        Ok(())
    }

    /// Moves to the state named by `stopped`, on behalf of `caller`.
    pub(crate) fn set(&mut self, caller: &Address, stopped: bool) -> Result<()> {
        self.ensure_owner(caller)?;
        self.state = GateState::from_flag(stopped);
        Ok(())
    }
}
