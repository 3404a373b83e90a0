//! Generate a persona, scenario, or misinterpretation from the command line.
//!
//! This binary delegates to `content_generators::cli` for input resolution
//! and rendering, keeping the command testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use content_generators::cli::{CliArgs, CliError, load_settings, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    match generate(&args) {
        Ok(rendered) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{rendered}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &CliArgs) -> Result<String, CliError> {
    let settings = load_settings()?;
    run(args, &settings)
}
