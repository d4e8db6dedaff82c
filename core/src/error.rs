//! Error type shared by every component.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    /// An element the markup contract requires is absent; the owning
    /// component stays inactive.
    #[error("required element missing: {selector}")]
    MissingElement { selector: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A host binding call failed (observer construction, listener registration)
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl FolioError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    /// True for the graceful-degradation case that should not be reported loudly.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
