use crate::nodes::NodeListError;
use std::path::Path;
use tracing::info;

/// Ordered list of node names, usually the output of `salt-run manage.up`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeInventory {
    nodes: Vec<String>,
}

impl NodeInventory {
    pub fn new(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, NodeListError> {
        let path = path.as_ref();
        let label = path.display().to_string();

        let content =
            std::fs::read_to_string(path).map_err(|e| NodeListError::from_io(&label, e))?;
        let inventory = Self::parse(&label, &content)?;

        info!("Loaded {} nodes from {}", inventory.len(), label);
        Ok(inventory)
    }

    /// An empty document is an empty inventory.
    pub fn parse(label: &str, content: &str) -> Result<Self, NodeListError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let nodes: Option<Vec<String>> =
            serde_yaml::from_str(content).map_err(|e| NodeListError::InvalidYaml {
                path: label.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::new(nodes.unwrap_or_default()))
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NodeInventory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
