//! Placeholder substitution over text templates.
//!
//! The renderer performs plain literal replacement of [`PLACEHOLDER`], one line at a
//! time. There is no escaping and no expression syntax: a template is any UTF-8 text
//! file, and every byte outside a placeholder occurrence is copied through unchanged,
//! line terminators included.
//!
//! ## Usage
//!
//! ```
//! use mkinfo_core::renderer::TemplateRenderer;
//! use mkinfo_core::version::VersionValue;
//!
//! let renderer = TemplateRenderer::new(VersionValue::from_contents("2.0.0\n"));
//! assert_eq!(renderer.render_str("build __VERSION__ now\n"), "build 2.0.0 now\n");
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{MkinfoError, Result};
use crate::version::VersionValue;

/// The literal token replaced by the version value.
pub const PLACEHOLDER: &str = "__VERSION__";

/// Counters collected while transforming a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Lines copied from input to output, including the final unterminated one.
    pub lines: usize,
    /// Placeholder occurrences replaced across all lines.
    pub replacements: usize,
}

/// Renders templates by substituting a loaded version value.
pub struct TemplateRenderer {
    version: VersionValue,
}

impl TemplateRenderer {
    pub fn new(version: VersionValue) -> Self {
        Self { version }
    }

    pub fn version(&self) -> &VersionValue {
        &self.version
    }

    /// Replace every placeholder occurrence in a single line.
    ///
    /// Lines without a placeholder are returned borrowed.
    pub fn render_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        if line.contains(PLACEHOLDER) {
            Cow::Owned(line.replace(PLACEHOLDER, self.version.as_str()))
        } else {
            Cow::Borrowed(line)
        }
    }

    /// Render an in-memory template, preserving its line structure.
    pub fn render_str(&self, text: &str) -> String {
        text.split_inclusive('\n')
            .map(|line| self.render_line(line))
            .collect()
    }

    /// Copy `input` to `output`, replacing placeholders line by line.
    ///
    /// The output is created (or truncated) before the input is opened. A failure
    /// after that point leaves whatever was written so far in place.
    pub fn transform(&self, input: &Path, output: &Path) -> Result<RenderStats> {
        let out_file = File::create(output).map_err(|e| MkinfoError::OutputCreate {
            path: output.to_path_buf(),
            source: e,
        })?;
        let in_file = File::open(input).map_err(|e| MkinfoError::InputOpen {
            path: input.to_path_buf(),
            source: e,
        })?;

        let mut reader = BufReader::new(in_file);
        let mut writer = BufWriter::new(out_file);
        let mut stats = RenderStats::default();
        let mut line = String::new();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| MkinfoError::InputRead {
                    path: input.to_path_buf(),
                    source: e,
                })?;
            if read == 0 {
                break;
            }

            let replaced = line.matches(PLACEHOLDER).count();
            writer
                .write_all(self.render_line(&line).as_bytes())
                .map_err(|e| MkinfoError::OutputWrite {
                    path: output.to_path_buf(),
                    source: e,
                })?;

            stats.lines += 1;
            stats.replacements += replaced;
            tracing::trace!(line = stats.lines, replaced, "line rendered");
        }

        writer.flush().map_err(|e| MkinfoError::OutputWrite {
            path: output.to_path_buf(),
            source: e,
        })?;

        Ok(stats)
    }
}
