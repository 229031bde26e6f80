//! Error types for the Cascade system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout Cascade.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Cascade operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a duplicate key error for a key already held by the primary layer.
    #[must_use]
    pub fn duplicate_key(key: &impl fmt::Debug) -> Self {
        Self::new(ErrorKind::DuplicateKey {
            key: format!("{key:?}"),
        })
    }

    /// Creates a key not found error after `searched` layers were consulted.
    #[must_use]
    pub fn key_not_found(key: &impl fmt::Debug, searched: usize) -> Self {
        Self::new(ErrorKind::KeyNotFound {
            key: format!("{key:?}"),
            searched,
        })
    }

    /// Returns true if this is a duplicate key error.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self.kind, ErrorKind::DuplicateKey { .. })
    }

    /// Returns true if this is a key not found error.
    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::KeyNotFound { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The primary layer already holds an entry for the key.
    #[error("duplicate key in primary layer: {key}")]
    DuplicateKey {
        /// Debug rendering of the rejected key.
        key: String,
    },

    /// No layer resolves the key.
    #[error("key not found: {key} (searched {searched} layers)")]
    KeyNotFound {
        /// Debug rendering of the missing key.
        key: String,
        /// Number of layers consulted, primary included.
        searched: usize,
    },
}
