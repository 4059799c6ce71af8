use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeListError {
    #[error("Node list not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied reading node list: {path}")]
    PermissionDenied { path: String },

    #[error("Failed to read node list {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Invalid YAML in node list {path}: {reason}")]
    InvalidYaml { path: String, reason: String },
}

impl NodeListError {
    pub(crate) fn from_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => NodeListError::FileNotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => NodeListError::PermissionDenied {
                path: path.to_string(),
            },
            _ => NodeListError::ReadFailed {
                path: path.to_string(),
                reason: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid node pattern in target {target}: {reason}")]
    InvalidPattern { target: String, reason: String },
}
