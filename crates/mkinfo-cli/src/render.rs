use std::path::Path;

use anyhow::Result;

use mkinfo_core::config::RenderConfig;
use mkinfo_core::pipeline;

use crate::output;

/// Render `input` into `output_path` with the version read from `version_file`.
///
/// Prints a short summary on success unless `quiet` is set.
pub fn run(input: &Path, output_path: &Path, version_file: &Path, quiet: bool) -> Result<()> {
    let config = RenderConfig::new(input, output_path).with_version_file(version_file);
    let outcome = pipeline::run(&config)?;

    if !quiet {
        output::print_render_summary(config.input(), config.output(), &outcome);
    }

    Ok(())
}
