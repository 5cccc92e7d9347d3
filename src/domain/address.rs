//! Chain-agnostic account identity.

use core::fmt;

/// An account identity: a user, the pool owner, the pool's own account,
/// or a ledger contract.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// valid, so construction is infallible.  The all-zero address is reserved
/// as a sentinel and rejected by [`DexConfig`](crate::config::DexConfig).
///
/// # Examples
///
/// ```
/// use cpmm_dex::domain::Address;
///
/// let alice = Address::from_bytes([1u8; 32]);
/// assert_eq!(alice.as_bytes(), [1u8; 32]);
/// assert!(!alice.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero sentinel address.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the all-zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

/// Lower-case hex with a `0x` prefix, abbreviated to the first and last
/// four bytes.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        f.write_str("..")?;
        for b in &self.0[28..] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sentinel() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::from_bytes([9u8; 32]).is_zero());
    }

    #[test]
    fn equality_by_bytes() {
        assert_eq!(Address::from_bytes([1u8; 32]), Address::from_bytes([1u8; 32]));
        assert_ne!(Address::from_bytes([1u8; 32]), Address::from_bytes([2u8; 32]));
    }

    #[test]
    fn display_abbreviates() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        assert_eq!(
            Address::from_bytes(bytes).to_string(),
            "0xab000000..00000001"
        );
    }
}
