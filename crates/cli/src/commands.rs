pub mod check;
pub mod escape;
pub mod sync;

use crate::GlobalArgs;
use anyhow::anyhow;
use clap::{Parser, builder::NonEmptyStringValueParser};
use inliner_core::{Config, Inliner, SyncOptions};
use std::path::PathBuf;

/// Arguments shared by every command that inlines a source into a destination
#[derive(Clone, Debug, Parser)]
pub struct InlineArgs {
    /// File to embed. If omitted, use `source` from the config file
    source: Option<PathBuf>,
    /// File containing the placeholder. If omitted, use `destination` from
    /// the config file
    destination: Option<PathBuf>,
    /// If the placeholder is gone, update the block a previous run inlined.
    /// The block is found by its opening literal
    #[clap(long)]
    resync: bool,
    /// Start marker of a page that hasn't been inlined yet
    #[clap(long, value_parser = NonEmptyStringValueParser::new())]
    placeholder: Option<String>,
    /// Literal written in front of the inlined source
    #[clap(long, value_parser = NonEmptyStringValueParser::new())]
    opening: Option<String>,
    /// End marker; the region ends at its first occurrence after the start
    #[clap(long, value_parser = NonEmptyStringValueParser::new())]
    closing: Option<String>,
}

impl InlineArgs {
    /// Merge these arguments over the config file. Arguments win
    fn build_inliner(self, global: &GlobalArgs) -> anyhow::Result<Inliner> {
        let config = global.load_config()?;
        let source = required(self.source, config.source, "source", "SOURCE")?;
        let destination = required(
            self.destination,
            config.destination,
            "destination",
            "DESTINATION",
        )?;

        let mut markers = config.markers;
        if let Some(placeholder) = self.placeholder {
            markers.placeholder = placeholder;
        }
        if let Some(opening) = self.opening {
            markers.opening = opening;
        }
        if let Some(closing) = self.closing {
            markers.closing = closing;
        }

        Ok(Inliner::new(
            source,
            destination,
            SyncOptions {
                markers,
                resync: self.resync || config.resync,
            },
        ))
    }
}

/// Resolve a path that must come from either the command line or the config
fn required(
    arg: Option<PathBuf>,
    configured: Option<PathBuf>,
    field: &str,
    arg_name: &str,
) -> anyhow::Result<PathBuf> {
    arg.or(configured).ok_or_else(|| {
        anyhow!(
            "No {field} file given; pass `{arg_name}` or set `{field}` in the \
            config file"
        )
    })
}

/// Source path for commands that only read the source
fn source_path(
    arg: Option<PathBuf>,
    global: &GlobalArgs,
) -> anyhow::Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => {
            let Config { source, .. } = global.load_config()?;
            required(None, source, "source", "SOURCE")
        }
    }
}
