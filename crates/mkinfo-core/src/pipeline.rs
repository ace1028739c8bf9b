//! The two-stage render run: load the version, then transform the template.
//!
//! The version is always fully loaded before the output file is touched, so a
//! missing version file never creates or truncates the output.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::renderer::{RenderStats, TemplateRenderer};
use crate::version::VersionValue;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    /// The version value that was substituted.
    pub version: VersionValue,
    /// Line and replacement counts for the output.
    pub stats: RenderStats,
}

/// Run the full pipeline described by `config`.
pub fn run(config: &RenderConfig) -> Result<RenderOutcome> {
    // Stage 1: version
    let version = VersionValue::load(&config.version_file)?;
    tracing::debug!(
        path = %config.version_file.display(),
        version = %version,
        "version loaded"
    );

    // Stage 2: template
    let renderer = TemplateRenderer::new(version);
    let stats = renderer.transform(config.input(), config.output())?;
    tracing::info!(
        input = %config.input().display(),
        output = %config.output().display(),
        lines = stats.lines,
        replacements = stats.replacements,
        "template rendered"
    );

    Ok(RenderOutcome {
        version: renderer.version().clone(),
        stats,
    })
}
