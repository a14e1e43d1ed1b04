use thiserror::Error;

/// Errors surfaced by the few fallible operations in the core.
///
/// Layout, phase and interpolation math never fail; degenerate inputs are
/// guarded in place instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    #[error("no content section matches {0:?}")]
    LookupMiss(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}
