use crate::{GlobalArgs, Subcommand, commands::source_path};
use clap::Parser;
use inliner_core::{escape_template_literal, read_text};
use std::{path::PathBuf, process::ExitCode};

/// Print the escaped form of a source file, exactly as it would be inlined
#[derive(Clone, Debug, Parser)]
pub struct EscapeCommand {
    /// File to escape. If omitted, use `source` from the config file
    source: Option<PathBuf>,
}

impl Subcommand for EscapeCommand {
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        let source = source_path(self.source, &global)?;
        let text = read_text(&source)?;
        print!("{}", escape_template_literal(&text));
        Ok(ExitCode::SUCCESS)
    }
}
