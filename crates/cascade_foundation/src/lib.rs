//! Errors, persistent collections, and the read-only layer trait for Cascade.
//!
//! This crate provides:
//! - [`Error`] - Error types for layered lookups and writes
//! - [`Layer`] - Read-only mapping trait consulted by a layered map
//! - [`SharedLayer`] - Shared, non-owning handle to a layer
//! - Persistent collections ([`LtSet`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod layer;

pub use collections::{LtMap, LtSet};
pub use error::{Error, ErrorKind, Result};
pub use layer::{Layer, LayerIter, SharedLayer, shared};
