#![forbid(unsafe_code)]
#![deny(clippy::all)]

//! Command line interface for Inliner.
//!
//! **This crate is not semver compliant**. The version is locked to the root
//! `inliner` crate version. If you choose to depend directly on this crate, you
//! do so at your own risk of breakage.

mod commands;
mod util;

pub use crate::util::{exit_code, print_error};

use crate::commands::{
    check::CheckCommand, escape::EscapeCommand, sync::SyncCommand,
};
use clap::{Parser, ValueEnum};
use inliner_core::Config;
use std::{path::PathBuf, process::ExitCode};
use tracing::level_filters::LevelFilter;

const COMMAND_NAME: &str = "inliner";

#[derive(Debug, Parser)]
#[clap(
    author,
    version,
    about,
    name = COMMAND_NAME,
    long_about = "Copy a source file into the template-literal placeholder \
        of a documentation page, escaping it so it stays a literal string"
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub subcommand: CliCommand,
}

impl Args {
    /// Alias for [clap::Parser::parse]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Arguments that are available to all subcommands
#[derive(Debug, Parser)]
pub struct GlobalArgs {
    /// YAML config file providing default paths and markers. Relative paths
    /// in the file are resolved against the file's directory
    #[clap(long, short, global = true)]
    pub config: Option<PathBuf>,
    /// Verbosity of log output, which is written to stderr
    #[clap(long, global = true, default_value = "off")]
    pub log_level: LogLevel,
}

impl GlobalArgs {
    /// Load the config file if one was given, otherwise use the default
    fn load_config(&self) -> anyhow::Result<Config> {
        self.config
            .as_deref()
            .map(Config::load)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

/// Log verbosity
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// A CLI subcommand
#[derive(Clone, Debug, clap::Subcommand)]
pub enum CliCommand {
    Check(CheckCommand),
    Escape(EscapeCommand),
    Sync(SyncCommand),
}

impl CliCommand {
    /// Execute this CLI subcommand
    pub fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        match self {
            Self::Check(command) => command.execute(global),
            Self::Escape(command) => command.execute(global),
            Self::Sync(command) => command.execute(global),
        }
    }
}

/// An executable subcommand. This trait isn't strictly necessary because we do
/// static dispatch via the command enum, but it's helpful to enforce a
/// consistent interface for each subcommand.
trait Subcommand {
    /// Execute the subcommand
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode>;
}
