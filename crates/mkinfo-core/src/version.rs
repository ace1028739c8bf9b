//! Loading of the version value substituted into templates.
//!
//! The version file holds a single line of text. Its whole content, minus every
//! carriage-return and line-feed character, is the version value. No format is
//! enforced: `1.2.3`, `v2-beta` and `nightly` are all accepted as-is.

use std::fmt;
use std::path::Path;

use crate::error::{MkinfoError, Result};

/// Default location of the version file, relative to the working directory.
pub const DEFAULT_VERSION_FILE: &str = "version.txt";

/// The scalar version string, loaded once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionValue(String);

impl VersionValue {
    /// Read the version file at `path` and strip all line-ending characters.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MkinfoError::VersionRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_contents(&contents))
    }

    /// Build a version value from raw file contents.
    ///
    /// Removes every `\r` and `\n`, not only trailing ones.
    pub fn from_contents(contents: &str) -> Self {
        Self(contents.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
