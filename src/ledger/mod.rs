//! Reference ledger implementations.
//!
//! [`MemoryLedger`] implements both [`Ledger`](crate::traits::Ledger) and
//! [`TokenLedger`](crate::traits::TokenLedger) in memory.  Production
//! deployments plug in their own implementations of those traits.

mod memory;

pub use memory::MemoryLedger;
