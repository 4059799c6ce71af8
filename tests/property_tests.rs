//! Property-based tests for target resolution and node grouping
//!
//! Invariants that should hold for ALL generated topfiles and inventories:
//! - Resolved roles were requested, and each resolved target declares its role
//! - Resolution is deterministic
//! - Literal targets always stand for themselves
//! - Pattern targets select the in-order subsequence of matching nodes

use proptest::prelude::*;
use topfile_util::{group_nodes, resolve_targets, TargetsByRole, TopfileData, WILDCARD_ROLE};

const ROLE_POOL: &[&str] = &["webserver", "database", "cache", "monitoring", "queue"];

fn role_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(ROLE_POOL).prop_map(str::to_string)
}

fn topfile_strategy() -> impl Strategy<Value = TopfileData> {
    prop::collection::vec(
        (
            "[a-z]{1,6}[0-9]?",
            prop::collection::vec(role_strategy(), 0..4),
        ),
        0..8,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

fn inventory_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,4}[0-9]{0,2}", 0..12)
}

proptest! {
    #[test]
    fn prop_resolved_roles_were_requested(
        data in topfile_strategy(),
        roles in prop::collection::vec(role_strategy(), 0..4),
    ) {
        let result = resolve_targets(&data, &roles);

        for (role, targets) in &result {
            if roles.is_empty() {
                prop_assert_eq!(role.as_str(), WILDCARD_ROLE);
                continue;
            }
            prop_assert!(roles.contains(role));
            prop_assert!(!targets.is_empty());
            for target in targets {
                prop_assert!(data.has_role(target, role));
            }
        }
    }

    #[test]
    fn prop_resolve_is_deterministic(
        data in topfile_strategy(),
        roles in prop::collection::vec(role_strategy(), 0..4),
    ) {
        prop_assert_eq!(resolve_targets(&data, &roles), resolve_targets(&data, &roles));
    }

    #[test]
    fn prop_literal_target_is_itself(
        target in "[a-z]{1,8}[0-9]{0,2}",
        nodes in inventory_strategy(),
    ) {
        let mut targets = TargetsByRole::new();
        targets.insert("role".to_string(), vec![target.clone()]);

        let result = group_nodes(&targets, &nodes).unwrap();
        prop_assert_eq!(&result["role"][&target], &vec![target.clone()]);
    }

    #[test]
    fn prop_pattern_selects_prefix_matches_in_order(
        prefix in "[a-z]{1,2}",
        nodes in inventory_strategy(),
    ) {
        let target = format!("E@{prefix}");
        let mut targets = TargetsByRole::new();
        targets.insert("role".to_string(), vec![target.clone()]);

        let result = group_nodes(&targets, &nodes).unwrap();
        let expected: Vec<String> = nodes
            .iter()
            .filter(|node| node.starts_with(&prefix))
            .cloned()
            .collect();

        // zero matches is an empty list, never a missing key
        prop_assert_eq!(&result["role"][&target], &expected);
    }

    #[test]
    fn prop_every_resolved_target_is_grouped(
        data in topfile_strategy(),
        roles in prop::collection::vec(role_strategy(), 0..4),
        nodes in inventory_strategy(),
    ) {
        let targets = resolve_targets(&data, &roles);
        let result = group_nodes(&targets, &nodes).unwrap();

        prop_assert_eq!(result.len(), targets.len());
        for (role, role_targets) in &targets {
            let grouped: Vec<&String> = result[role].keys().collect();
            let expected: Vec<&String> = role_targets.iter().collect();
            prop_assert_eq!(grouped, expected);
        }
    }
}
