//! Resolved inputs of a single render invocation.

use std::path::{Path, PathBuf};

use crate::version::DEFAULT_VERSION_FILE;

/// Paths used by one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Template to read.
    pub input: PathBuf,
    /// File to create or overwrite.
    pub output: PathBuf,
    /// File holding the version value.
    pub version_file: PathBuf,
}

impl RenderConfig {
    /// Create a config that reads the version from [`DEFAULT_VERSION_FILE`].
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
        }
    }

    pub fn with_version_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.version_file = path.into();
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
