use crate::cli::options::{Commands, OutputFormat, QueryOptions, TopfileUtilCli};
use crate::cli::output::{render_no_match, render_nodes, render_targets};
use crate::nodes::{group_nodes, NodeInventory};
use crate::topfile::Topfile;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Run the parsed command line and return what should be printed.
///
/// Roles matching nothing are not an error: the result is the
/// "No roles found" message.
pub fn execute(cli: &TopfileUtilCli) -> Result<String> {
    let options = QueryOptions::from(cli);
    let topfile = Topfile::load(&options.topfile)?;
    debug!("{}", topfile);

    match &cli.command {
        Commands::Targets { .. } => Ok(targets_command(&topfile, &options.roles)),
        Commands::Nodes { nodelist, out, .. } => {
            nodes_command(&topfile, nodelist, &options.roles, *out)
        }
    }
}

pub fn targets_command(topfile: &Topfile, roles: &[String]) -> String {
    let target_dict = topfile.targets(roles);
    if target_dict.is_empty() {
        return render_no_match(roles);
    }
    render_targets(&target_dict)
}

pub fn nodes_command(
    topfile: &Topfile,
    nodelist: &Path,
    roles: &[String],
    format: OutputFormat,
) -> Result<String> {
    let target_dict = topfile.targets(roles);
    let inventory = NodeInventory::load(nodelist)?;

    if target_dict.is_empty() {
        return Ok(render_no_match(roles));
    }

    let role_node_dict = group_nodes(&target_dict, inventory.nodes())
        .with_context(|| format!("Failed to match nodes for {}", topfile))?;
    info!(
        "Grouped {} nodes under {} roles",
        inventory.len(),
        role_node_dict.len()
    );

    Ok(render_nodes(&role_node_dict, format)?)
}
