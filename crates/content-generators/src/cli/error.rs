//! Error types for the `generate-content` command.

use thiserror::Error;

use crate::error::GenerateError;

/// Errors surfaced while resolving input and running a generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// None of `--input`, `--input-file`, or `--example` was supplied.
    #[error("missing input: pass one of --input, --input-file, or --example")]
    MissingInput,
    /// More than one input source was supplied.
    #[error("conflicting input sources: pass only one of --input, --input-file, or --example")]
    ConflictingInputs,
    /// The input file could not be opened or read.
    #[error("failed to read input file '{path}': {message}")]
    ReadInput {
        /// Path that was requested.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },
    /// The input was not valid JSON.
    #[error("input is not valid JSON: {message}")]
    InvalidInputJson {
        /// Parser error message.
        message: String,
    },
    /// The input contains a blocked term.
    #[error("input contains a blocked term ('{term}'); try softer wording")]
    Moderated {
        /// Term that matched.
        term: String,
    },
    /// Settings could not be loaded from the environment or config files.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader error message.
        message: String,
    },
    /// The payload could not be encoded for output.
    #[error("failed to encode output: {message}")]
    Encode {
        /// Serialiser error message.
        message: String,
    },
    /// Generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
