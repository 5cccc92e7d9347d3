//! Per-call execution context.

use super::{Address, Amount};

/// Who is calling, and how much native value is attached to the call.
///
/// Payable entry points (`init`, `eth_to_token`, `deposit`) read the
/// attached value as their native input.  Non-payable entry points reject
/// any non-zero value.
///
/// # Examples
///
/// ```
/// use cpmm_dex::domain::{Address, Amount, CallContext};
///
/// let alice = Address::from_bytes([1u8; 32]);
/// let call = CallContext::new(alice).with_value(Amount::new(1_000));
/// assert_eq!(call.sender(), alice);
/// assert_eq!(call.value(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    sender: Address,
    value: Amount,
}

impl CallContext {
    /// A call from `sender` with no native value attached.
    #[must_use]
    pub const fn new(sender: Address) -> Self {
        Self {
            sender,
            value: Amount::ZERO,
        }
    }

    /// Attaches `value` native units to the call.
    #[must_use]
    pub const fn with_value(self, value: Amount) -> Self {
        Self {
            sender: self.sender,
            value,
        }
    }

    /// The calling account.
    #[must_use]
    pub const fn sender(&self) -> Address {
        self.sender
    }

    /// The attached native value.
    pub const fn value(&self) -> Amount {
        self.value
    }
}
