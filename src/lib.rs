//! Cascade - layered key-value container
//!
//! This crate re-exports all layers of the Cascade system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: cascade_runtime    — Demo driver, CLI, logging
//! Layer 1: cascade_map        — LayeredMap, lookup and shadowing
//! Layer 0: cascade_foundation — Error, Layer trait, persistent collections
//! ```

pub use cascade_foundation as foundation;
pub use cascade_map as map;
pub use cascade_runtime as runtime;
