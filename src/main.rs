//! Inline a source file into the template-literal placeholder of a
//! documentation page. See `inliner --help`.

use inliner_cli::{Args, exit_code, print_error};
use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_tracing(args.global.log_level.into());
    args.subcommand
        .execute(args.global)
        .unwrap_or_else(|error| {
            print_error(&error);
            exit_code(&error)
        })
}

/// Set up tracing to log to stderr. Operator-facing messages are printed
/// directly, so logging stays quiet unless `--log-level` raises it.
fn initialize_tracing(level: LevelFilter) {
    let subscriber = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(level);
    tracing_subscriber::registry().with(subscriber).init();
}
