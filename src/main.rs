//! pkglint CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use pkglint::cli::{Cli, CommandDispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `--quiet` flag limits output to errors
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is INFO
fn init_tracing(debug: bool, quiet: bool) {
    let filter = if debug {
        EnvFilter::new("pkglint=debug")
    } else if quiet {
        EnvFilter::new("pkglint=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pkglint=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.quiet);

    tracing::debug!("pkglint starting with args: {:?}", cli);

    let project_root = std::env::current_dir().unwrap_or_default();
    let dispatcher = CommandDispatcher::new(project_root);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => result.exit_code as u8,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    let _ = out.flush();
    ExitCode::from(code)
}
