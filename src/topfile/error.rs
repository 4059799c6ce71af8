use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopfileError {
    #[error("Topfile not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied reading topfile: {path}")]
    PermissionDenied { path: String },

    #[error("Failed to read topfile {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Invalid YAML in topfile {path}: {reason}")]
    InvalidYaml { path: String, reason: String },

    #[error("Topfile {path} has no `base` section")]
    MissingBase { path: String },
}

impl TopfileError {
    pub(crate) fn from_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => TopfileError::FileNotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => TopfileError::PermissionDenied {
                path: path.to_string(),
            },
            _ => TopfileError::ReadFailed {
                path: path.to_string(),
                reason: err.to_string(),
            },
        }
    }
}
