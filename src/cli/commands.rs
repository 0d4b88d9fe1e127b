//! Command dispatch: one JSON document per invocation

use tracing::{debug, instrument};

use crate::cli::args::{BrowseArgs, Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::builtin_manifest;
use crate::infrastructure::di::ServiceContainer;

/// Run the parsed command and write its document to stdout.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let rendered = render_command(cli, container)?;
    output::document(&rendered)?;
    Ok(())
}

/// Build and serialize the document for `cli` without writing it.
///
/// Any failure happens here, before a single byte reaches stdout.
pub fn render_command(cli: &Cli, container: &ServiceContainer) -> CliResult<Vec<u8>> {
    match &cli.command {
        None => cmd_manifest(),
        Some(Commands::Browse(args)) => cmd_browse(container, args),
    }
}

#[instrument(skip_all)]
fn cmd_manifest() -> CliResult<Vec<u8>> {
    let manifest = builtin_manifest();
    debug!("manifest: {} commands", manifest.commands.len());
    Ok(output::render_pretty(&manifest, "manifest")?)
}

#[instrument(skip(container))]
fn cmd_browse(container: &ServiceContainer, args: &BrowseArgs) -> CliResult<Vec<u8>> {
    let params = args.params();
    let home = container.settings.home_dir.as_deref();
    let listing = container.browse.browse(&params, home)?;
    debug!("browse: {} items", listing.items.len());
    Ok(output::render_compact(&listing, "listing")?)
}
