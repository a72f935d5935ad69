use crate::region::MarkerNotFound;
use derive_more::Display;
use std::{io, path::PathBuf, string::FromUtf8Error};
use thiserror::Error;

/// Any error that can abort an inline run. Every variant is fatal, and the
/// destination file is never written when one of these is returned from
/// reading or locating.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Destination document lacks the start or end marker
    #[error(transparent)]
    MarkerNotFound(#[from] MarkerNotFound),

    /// Reading or writing a file failed
    #[error("Error {action} `{}`", .path.display())]
    Io {
        action: IoAction,
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// File content isn't valid UTF-8
    #[error("`{}` is not valid UTF-8 text", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        error: FromUtf8Error,
    },
}

impl SyncError {
    /// Process exit code for this kind of failure. 1 is left for generic
    /// failures and 2 is used by clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MarkerNotFound(_) => 3,
            Self::Io { .. } => 4,
            Self::Encoding { .. } => 5,
        }
    }
}

/// What we were doing to a file when it failed
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum IoAction {
    #[display("reading")]
    Read,
    #[display("writing")]
    Write,
}
