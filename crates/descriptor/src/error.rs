//! Error types for stbuild-descriptor

use thiserror::Error;

/// Errors that can occur when constructing or loading descriptors
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Library name must not be empty")]
    EmptyName,

    #[error("Duplicate tool in dependency list: {0}")]
    DuplicateTool(String),

    #[error("Revision must be 1 or greater, got {0}")]
    InvalidRevision(u32),

    #[error("No recorded revision {0} for '{1}'")]
    UnknownRevision(u32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),
}
