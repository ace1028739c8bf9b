//! Terminal output formatting for the mkinfo CLI.
//!
//! Summaries go to stdout, errors to stderr, both styled with the [`console`] crate.

use std::path::Path;

use console::style;
use mkinfo_core::pipeline::RenderOutcome;

/// Print the `[OK]` line for a finished render followed by its counters.
pub fn print_render_summary(input: &Path, output: &Path, outcome: &RenderOutcome) {
    println!(
        "{} Rendered {} -> {}",
        style("[OK]").green().bold(),
        input.display(),
        output.display()
    );
    print_key_value("Version", outcome.version.as_str());
    print_key_value("Lines", &outcome.stats.lines.to_string());
    print_key_value("Replacements", &outcome.stats.replacements.to_string());
}

/// Print an `[ERROR]` line to stderr, then one `caused by:` line per source.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", style("caused by:").dim(), cause);
    }
}

fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}
