//! Unified error types for mkinfo.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while rendering a template.
#[derive(Error, Debug)]
pub enum MkinfoError {
    // --- Version ---

    /// The version file is missing, unreadable, or not valid UTF-8.
    #[error("failed to read version file at {path}")]
    VersionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Input ---

    /// The input template could not be opened.
    #[error("failed to open input file {path}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line from the input failed part way through.
    #[error("failed to read from input file {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Output ---

    /// The output file could not be created or truncated.
    #[error("failed to create output file {path}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the output failed part way through.
    #[error("failed to write to output file {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alias for `Result<T, MkinfoError>`.
pub type Result<T> = std::result::Result<T, MkinfoError>;
