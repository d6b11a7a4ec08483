//! Error types for Archigrid operations.
//!
//! This module provides the main error type [`ArchigridError`]. The layout
//! passes themselves never fail; errors only arise at the edges, while
//! reading input, building the diagram graph or writing the result.

use std::{io, ops::Range};

use thiserror::Error;

use archigrid_core::identifier::Id;

/// The main error type for Archigrid operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the offending source text together with the
/// byte span reported by the TOML parser so front ends can point at the
/// exact location.
#[derive(Debug, Error)]
pub enum ArchigridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Duplicate diagram object `{0}`")]
    DuplicateObject(Id),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize layout: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ArchigridError {
    /// Create a new `Parse` error from a TOML error and the document it came from.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
