//! Configuration for a native/token exchange pool.

use crate::domain::Address;
use crate::error::{DexError, Result};

/// Immutable deployment parameters of a pool.
///
/// - `owner`: the only account allowed to toggle the emergency stop.
/// - `account`: the pool's own account on both ledgers; reserves are
///   held here.
///
/// The fee (0.3%) is fixed and not part of the configuration.
///
/// # Validation
///
/// - Neither address may be the zero sentinel.
/// - The owner and the pool account must differ.
///
/// # Examples
///
/// ```
/// use cpmm_dex::config::DexConfig;
/// use cpmm_dex::domain::Address;
///
/// let cfg = DexConfig::new(Address::from_bytes([1u8; 32]), Address::from_bytes([2u8; 32]));
/// assert!(cfg.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DexConfig {
    owner: Address,
    account: Address,
}

impl DexConfig {
    /// Creates a validated `DexConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfig`] if validation fails.
    pub fn new(owner: Address, account: Address) -> Result<Self> {
        let config = Self { owner, account };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configs bypass [`DexConfig::new`], so the pool calls
    /// this again on construction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfig`] naming the violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.owner.is_zero() {
            return Err(DexError::InvalidConfig("owner must not be the zero address"));
        }
        if self.account.is_zero() {
            return Err(DexError::InvalidConfig(
                "pool account must not be the zero address",
            ));
        }
        if self.owner == self.account {
            return Err(DexError::InvalidConfig(
                "owner and pool account must differ",
            ));
        }
        Ok(())
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the pool's own account.
    #[must_use]
    pub const fn account(&self) -> Address {
        self.account
    }
}
