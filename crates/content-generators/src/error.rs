//! Error types for the content-generators crate.
//!
//! This module defines semantic error enums for input validation, pack
//! loading, and generation dispatch, following the project's error handling
//! conventions with `thiserror`.

use std::fmt;

use thiserror::Error;

use crate::pack::PackId;

/// Why a single input field was rejected during normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// The raw payload was not a JSON object.
    NotAnObject,
    /// The field was absent from the payload.
    Missing,
    /// The field was present but not a JSON string.
    NotAString,
    /// The trimmed field is shorter than the minimum length.
    TooShort {
        /// Minimum number of characters after trimming.
        min: usize,
    },
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("not an object"),
            Self::Missing => f.write_str("missing"),
            Self::NotAString => f.write_str("not a string"),
            Self::TooShort { min } => write!(f, "too short (min {min})"),
        }
    }
}

/// A raw input field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input field '{field}': {reason}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: String,
    /// Why the field was rejected.
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Builds a validation error for the named field.
    #[must_use]
    pub fn new(field: &str, reason: ValidationReason) -> Self {
        Self {
            field: field.to_owned(),
            reason,
        }
    }
}

/// Errors that can occur when parsing or assembling content packs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// The pack JSON is malformed or missing required fields.
    #[error("invalid pack JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The pack document version is not supported.
    #[error("unsupported pack version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// A phrase pool or caption list has no entries.
    #[error("pack '{pack}' has an empty '{pool}' pool")]
    EmptyPool {
        /// Pack that failed validation.
        pack: PackId,
        /// Name of the empty pool.
        pool: &'static str,
    },

    /// Two packs in one registry share an identifier.
    #[error("pack '{pack}' is defined more than once")]
    DuplicatePack {
        /// The repeated pack identifier.
        pack: PackId,
    },
}

/// Errors returned by a generation call.
///
/// Every variant is terminal: the caller must reject the whole request, and
/// no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The generation type is not one of the supported kinds.
    #[error("unknown generation type '{value}'")]
    UnknownType {
        /// The rejected type name.
        value: String,
    },

    /// The pack identifier is unknown or absent from the registry.
    #[error("unknown pack '{value}'")]
    UnknownPack {
        /// The rejected pack identifier.
        value: String,
    },

    /// The tone is not one of the supported caption styles.
    #[error("unknown tone '{value}'")]
    UnknownTone {
        /// The rejected tone name.
        value: String,
    },

    /// The raw input failed normalisation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A generator drew from a pool that has no entries.
    #[error("pack '{pack}' has no entries in '{pool}'")]
    EmptyPool {
        /// Pack the generator was reading.
        pack: PackId,
        /// Name of the empty pool.
        pool: &'static str,
    },

    /// The normalised input could not be serialised for seeding.
    #[error("failed to serialise normalised input: {message}")]
    Serialization {
        /// Serialiser error message.
        message: String,
    },

    /// The pack registry could not be loaded.
    #[error("pack registry unavailable: {0}")]
    Pack(#[from] PackError),
}
