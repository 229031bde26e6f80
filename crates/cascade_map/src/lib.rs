//! Layered map for Cascade.
//!
//! This crate provides:
//! - [`LayeredMap`] - A writable primary layer over an ordered list of read-only layers
//! - [`Origin`] - Which layer a key resolves through
//! - [`Iter`] and [`Values`] - Lazy iteration across every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod iter;
pub mod layered;

pub use iter::{Iter, Values};
pub use layered::{LayeredMap, Origin};
