use inliner_core::SyncError;
use std::process::ExitCode;

/// Print an error chain to stderr
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{error}");
    error
        .chain()
        .skip(1)
        .for_each(|cause| eprintln!("  {cause}"));
}

/// Map an error to the process exit code. Inline failures get a code per kind
/// (see [SyncError::exit_code]); anything else is a generic failure.
pub fn exit_code(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<SyncError>())
        .map(|error| ExitCode::from(error.exit_code()))
        .unwrap_or(ExitCode::FAILURE)
}
