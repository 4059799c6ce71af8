use crate::topfile::{resolve_targets, TopfileError};
use crate::types::{TargetsByRole, TopfileData};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_TOPFILE_PATH: &str = "./top.sls";

/// On-disk shape of a topfile. Only the `base` environment is read.
#[derive(Debug, Deserialize)]
struct TopfileDocument {
    base: Option<IndexMap<String, Option<Vec<serde_yaml::Value>>>>,
}

/// A loaded topfile and the path it came from
#[derive(Debug, Clone)]
pub struct Topfile {
    path: PathBuf,
    data: TopfileData,
}

impl Topfile {
    /// Read the file, then deserialize it. The whole document is loaded
    /// before any query runs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TopfileError> {
        let path = path.as_ref();
        let label = path.display().to_string();

        let content =
            std::fs::read_to_string(path).map_err(|e| TopfileError::from_io(&label, e))?;
        debug!("Read {} bytes from topfile {}", content.len(), label);

        let topfile = Self::parse(path, &content)?;
        info!(
            "Loaded topfile {} with {} targets",
            label,
            topfile.data.len()
        );
        Ok(topfile)
    }

    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, TopfileError> {
        let path = path.into();
        let label = path.display().to_string();

        let document: TopfileDocument =
            serde_yaml::from_str(content).map_err(|e| TopfileError::InvalidYaml {
                path: label.clone(),
                reason: e.to_string(),
            })?;

        let base = document
            .base
            .ok_or(TopfileError::MissingBase { path: label })?;

        // `web1:` with no roles deserializes as null. Entries such as
        // `- match: pcre` are not roles and are skipped.
        let data = base
            .into_iter()
            .map(|(target, entries)| {
                let roles = entries
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|entry| entry.as_str().map(str::to_string))
                    .collect::<Vec<_>>();
                (target, roles)
            })
            .collect::<TopfileData>();

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &TopfileData {
        &self.data
    }

    /// Targets declaring each of `roles`; see [`resolve_targets`]
    pub fn targets(&self, roles: &[String]) -> TargetsByRole {
        resolve_targets(&self.data, roles)
    }
}

impl fmt::Display for Topfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topfile: {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPFILE: &str = r#"
base:
  web1:
    - webserver
    - monitoring
  'E@db.*':
    - database
  app1:
"#;

    #[test]
    fn test_parse_keeps_document_order() {
        let topfile = Topfile::parse("top.sls", TOPFILE).unwrap();
        let targets: Vec<&str> = topfile.data().targets().collect();
        assert_eq!(targets, vec!["web1", "E@db.*", "app1"]);
    }

    #[test]
    fn test_parse_null_roles_as_empty() {
        let topfile = Topfile::parse("top.sls", TOPFILE).unwrap();
        assert_eq!(topfile.data().roles_for("app1"), Some(&[][..]));
    }

    #[test]
    fn test_parse_ignores_other_environments() {
        let content = "base:\n  web1: [webserver]\ndev:\n  web2: [webserver]\n";
        let topfile = Topfile::parse("top.sls", content).unwrap();
        assert_eq!(topfile.data().len(), 1);
        assert!(topfile.data().has_role("web1", "webserver"));
    }

    #[test]
    fn test_parse_skips_match_options() {
        let content = r#"
base:
  'web.*':
    - match: pcre
    - webserver
  db1:
    - database
"#;
        let topfile = Topfile::parse("top.sls", content).unwrap();

        assert_eq!(
            topfile.data().roles_for("web.*"),
            Some(&["webserver".to_string()][..])
        );
        assert!(topfile.data().has_role("db1", "database"));
    }

    #[test]
    fn test_parse_missing_base() {
        let result = Topfile::parse("top.sls", "dev:\n  web1: [webserver]\n");
        match result.unwrap_err() {
            TopfileError::MissingBase { path } => assert_eq!(path, "top.sls"),
            other => panic!("Expected MissingBase error, got: {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = Topfile::parse("top.sls", "base: [unclosed");
        assert!(matches!(
            result.unwrap_err(),
            TopfileError::InvalidYaml { .. }
        ));
    }

    #[test]
    fn test_display_names_path() {
        let topfile = Topfile::parse("pillar/top.sls", TOPFILE).unwrap();
        assert_eq!(topfile.to_string(), "Topfile: pillar/top.sls");
    }
}
