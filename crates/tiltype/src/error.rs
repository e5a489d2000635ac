use thiserror::Error;

/// Failure of the motion-sensor permission request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The platform answered, but not with "granted".
    #[error("motion permission denied ({0})")]
    Denied(String),
    /// The request itself rejected or threw.
    #[error("motion permission request failed: {0}")]
    Request(String),
}

/// Failure while loading or validating a [`TypeConfig`](crate::TypeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
