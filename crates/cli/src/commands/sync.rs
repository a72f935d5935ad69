use crate::{GlobalArgs, Subcommand, commands::InlineArgs};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

/// Inline a source file into the placeholder of a destination file
#[derive(Clone, Debug, Parser)]
pub struct SyncCommand {
    #[clap(flatten)]
    inline: InlineArgs,
    /// Print the updated destination to stdout instead of writing it
    #[clap(long)]
    dry_run: bool,
}

impl Subcommand for SyncCommand {
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        let inliner = self.inline.build_inliner(&global)?;

        if self.dry_run {
            let outcome = inliner.plan()?;
            info!(changed = outcome.changed, "Dry run, not writing");
            print!("{}", outcome.content);
        } else {
            inliner.sync()?;
            println!(
                "Successfully updated {}",
                inliner.destination().display()
            );
        }
        Ok(ExitCode::SUCCESS)
    }
}
