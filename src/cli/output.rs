use crate::cli::options::OutputFormat;
use crate::types::{RoleNodeDict, TargetsByRole};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to render JSON: {reason}")]
    Json { reason: String },

    #[error("Failed to render YAML: {reason}")]
    Yaml { reason: String },
}

/// Role names, each followed by its targets indented one tab
pub fn render_targets(targets_by_role: &TargetsByRole) -> String {
    let mut out = String::new();
    for (role, targets) in targets_by_role {
        out.push_str(&format!("{role}\n"));
        for target in targets {
            out.push_str(&format!("\t{target}\n"));
        }
    }
    out
}

pub fn render_no_match(roles: &[String]) -> String {
    format!("No roles found to match:\n\t{}\n", roles.join(", "))
}

pub fn render_nodes(
    role_node_dict: &RoleNodeDict,
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Pretty => Ok(render_nodes_pretty(role_node_dict)),
        OutputFormat::Txt => Ok(render_nodes_list(role_node_dict)),
        OutputFormat::Json => render_nodes_json(role_node_dict),
        OutputFormat::Yaml => render_nodes_yaml(role_node_dict),
    }
}

fn render_nodes_pretty(role_node_dict: &RoleNodeDict) -> String {
    let mut out = String::new();
    for (role, by_target) in role_node_dict {
        out.push_str(&format!("\n{role}\n"));
        for (target, nodes) in by_target {
            out.push_str(&format!("\t{target}\n"));
            for node in nodes {
                out.push_str(&format!("\t\t{node}\n"));
            }
        }
    }
    out
}

/// One sorted node list per role, suitable for feeding to other tools.
/// A node selected by two targets of the same role is listed twice.
fn render_nodes_list(role_node_dict: &RoleNodeDict) -> String {
    let mut out = String::new();
    for (role, by_target) in role_node_dict {
        out.push_str(&format!("#\n# {role}\n#\n"));
        let mut nodes: Vec<&str> = by_target.values().flatten().map(String::as_str).collect();
        nodes.sort_unstable();
        out.push_str(&nodes.join("\n"));
        out.push('\n');
    }
    out
}

fn render_nodes_json(role_node_dict: &RoleNodeDict) -> Result<String, OutputError> {
    let mut json = serde_json::to_string(role_node_dict).map_err(|e| OutputError::Json {
        reason: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}

fn render_nodes_yaml(role_node_dict: &RoleNodeDict) -> Result<String, OutputError> {
    serde_yaml::to_string(role_node_dict).map_err(|e| OutputError::Yaml {
        reason: e.to_string(),
    })
}
