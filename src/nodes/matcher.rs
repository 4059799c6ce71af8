use crate::nodes::PatternError;
use crate::types::{RoleNodeDict, TargetsByRole, PATTERN_PREFIX};
use fancy_regex::Regex;
use indexmap::IndexMap;
use tracing::debug;

/// How a topfile target selects nodes
#[derive(Debug, Clone)]
pub enum TargetMatcher {
    /// A hostname, taken as-is
    Literal(String),
    /// An `E@` target; matches nodes whose name starts with a match.
    /// Look-around and backreferences are supported, as in Salt's PCRE.
    Pattern { target: String, regex: Regex },
}

impl TargetMatcher {
    pub fn parse(target: &str) -> Result<Self, PatternError> {
        match target.strip_prefix(PATTERN_PREFIX) {
            Some(pattern) => {
                let anchored = format!("^(?:{pattern})");
                let regex = Regex::new(&anchored).map_err(|e| PatternError::InvalidPattern {
                    target: target.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(TargetMatcher::Pattern {
                    target: target.to_string(),
                    regex,
                })
            }
            None => Ok(TargetMatcher::Literal(target.to_string())),
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, TargetMatcher::Pattern { .. })
    }

    /// Nodes this target stands for. Literal hostnames are trusted and not
    /// checked against `nodes`.
    ///
    /// Fails if the pattern engine gives up on a node, e.g. when its
    /// backtrack limit is exceeded.
    pub fn select<S: AsRef<str>>(&self, nodes: &[S]) -> Result<Vec<String>, PatternError> {
        let (target, regex) = match self {
            TargetMatcher::Literal(host) => return Ok(vec![host.clone()]),
            TargetMatcher::Pattern { target, regex } => (target, regex),
        };

        let mut selected = Vec::new();
        for node in nodes.iter().map(AsRef::as_ref) {
            let matched = regex
                .is_match(node)
                .map_err(|e| PatternError::InvalidPattern {
                    target: target.clone(),
                    reason: e.to_string(),
                })?;
            if matched {
                selected.push(node.to_string());
            }
        }
        Ok(selected)
    }
}

/// Expand every target of every role into the nodes it selects.
///
/// Each (role, target) pair from `targets_by_role` is present in the result,
/// with an empty list when a pattern matches nothing. Fails without a partial
/// result if any pattern does not compile.
pub fn group_nodes<S: AsRef<str>>(
    targets_by_role: &TargetsByRole,
    nodes: &[S],
) -> Result<RoleNodeDict, PatternError> {
    let mut result = RoleNodeDict::new();

    for (role, targets) in targets_by_role {
        let mut by_target = IndexMap::with_capacity(targets.len());

        for target in targets {
            let matcher = TargetMatcher::parse(target)?;
            let selected = matcher.select(nodes)?;
            if matcher.is_pattern() {
                debug!("Pattern {} matched {} nodes", target, selected.len());
            }
            by_target.insert(target.clone(), selected);
        }

        result.insert(role.clone(), by_target);
    }

    Ok(result)
}
