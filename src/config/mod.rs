//! Declarative pool configuration.
//!
//! A [`DexConfig`] is validated on construction and again when a pool is
//! built from it, so a deserialized config cannot skip validation.

mod dex_config;

pub use dex_config::DexConfig;
