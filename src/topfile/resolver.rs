use crate::types::{TargetsByRole, TopfileData, WILDCARD_ROLE};
use tracing::{debug, warn};

/// Map each requested role to the targets that declare it.
///
/// With no roles, every target is returned under [`WILDCARD_ROLE`]. Roles no
/// target declares are left out of the result. A role requested more than
/// once appears once; the later scan replaces the earlier one.
pub fn resolve_targets(data: &TopfileData, roles: &[String]) -> TargetsByRole {
    let mut results = TargetsByRole::new();

    if roles.is_empty() {
        debug!("No roles requested, listing all {} targets", data.len());
        results.insert(
            WILDCARD_ROLE.to_string(),
            data.targets().map(str::to_string).collect(),
        );
        return results;
    }

    for role in roles {
        let targets: Vec<String> = data
            .entries()
            .filter(|(_, target_roles)| target_roles.iter().any(|r| r == role))
            .map(|(target, _)| target.to_string())
            .collect();

        if targets.is_empty() {
            warn!("No targets declare role {}", role);
            continue;
        }

        debug!("Role {} resolved to {} targets", role, targets.len());
        results.insert(role.clone(), targets);
    }

    results
}
