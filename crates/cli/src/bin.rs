//! Test-only binary for CLI integration tests. The real entry point lives in
//! the root `inliner` crate; this one skips logging setup so test output
//! stays deterministic.

use inliner_cli::{Args, exit_code, print_error};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    args.subcommand
        .execute(args.global)
        .unwrap_or_else(|error| {
            print_error(&error);
            exit_code(&error)
        })
}
