//! CLI argument definitions using clap

use std::ffi::OsString;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::cli::error::CliResult;
use crate::domain::BrowseParams;

/// Launcher plugin: prints its manifest when called without arguments
#[derive(Parser, Debug)]
#[command(name = "filebrowse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log to stderr: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List directory entries as actionable items (JSON)
    #[command(args_override_self = true)]
    Browse(BrowseArgs),
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct BrowseArgs {
    /// Directory to list (default: "."; a leading "~" is the home directory)
    #[arg(long, value_name = "PATH", allow_hyphen_values = true, value_hint = ValueHint::DirPath)]
    pub dir: Option<Option<String>>,
}

impl BrowseArgs {
    /// A `--dir` without value counts as absent.
    pub fn params(&self) -> BrowseParams {
        BrowseParams::new(self.dir.clone().flatten())
    }
}

impl Cli {
    /// Parse `args` (including the program name); clap failures, help and
    /// version requests come back as [`CliError::Usage`](crate::cli::CliError::Usage).
    pub fn try_parse_args<I, T>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }
}
