//! Core functionality for Inliner: copy a source file into a documentation
//! page, replacing the body of a template-literal placeholder with an escaped
//! copy of the source.
//!
//! The pipeline is linear: read, [escape](escape::escape_template_literal),
//! [locate](region::locate), [splice](splice::splice), write. Everything but
//! the first and last step is a pure function over strings; the file handling
//! lives in [Inliner].
//!
//! **This crate is not semver compliant**. The version is locked to the root
//! `inliner` crate version. If you choose to depend directly on this crate, you
//! do so at your own risk of breakage.

pub mod config;
mod error;
pub mod escape;
pub mod region;
pub mod splice;
mod sync;

pub use config::Config;
pub use error::{IoAction, SyncError};
pub use escape::escape_template_literal;
pub use region::{Anchor, MarkerKind, MarkerNotFound, Markers, Region, Span};
pub use splice::splice;
pub use sync::{Inliner, SyncOptions, SyncOutcome, read_text, write_text};
