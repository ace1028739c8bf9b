//! mkinfo CLI: stamp a version string into a text template.
//!
//! Reads the version from `version.txt` (or `--version-file`), replaces every
//! `__VERSION__` in `<INPUT>` and writes the result to `<OUTPUT>`.

mod output;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mkinfo_core::version::DEFAULT_VERSION_FILE;

#[derive(Parser)]
#[command(
    name = "mkinfo",
    about = "Replace __VERSION__ in a template with the contents of a version file",
    version
)]
struct Cli {
    /// Template file to read
    input: PathBuf,

    /// File to write (created or truncated)
    output: PathBuf,

    /// Further positionals are accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,

    /// File holding the version value
    #[arg(long, default_value = DEFAULT_VERSION_FILE)]
    version_file: PathBuf,

    /// Suppress the summary printed on success
    #[arg(short, long)]
    quiet: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // Usage errors exit 1 rather than clap's default 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match render::run(&cli.input, &cli.output, &cli.version_file, cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
