use crate::{GlobalArgs, Subcommand, commands::InlineArgs};
use clap::Parser;
use std::process::ExitCode;

/// Check if the destination is up to date with the source, without writing
///
/// Exits with 0 if running `sync` would not change the destination, and 1 if
/// it would. Pages that were already inlined need `--resync` to be found.
#[derive(Clone, Debug, Parser)]
pub struct CheckCommand {
    #[clap(flatten)]
    inline: InlineArgs,
}

impl Subcommand for CheckCommand {
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        let inliner = self.inline.build_inliner(&global)?;
        let outcome = inliner.plan()?;
        let destination = inliner.destination().display();
        if outcome.changed {
            eprintln!(
                "{destination} is out of date with {}",
                inliner.source().display()
            );
            Ok(ExitCode::FAILURE)
        } else {
            println!("{destination} is up to date");
            Ok(ExitCode::SUCCESS)
        }
    }
}
