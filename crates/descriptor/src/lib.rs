//! stbuild-descriptor: Library build descriptors for stbuild
//!
//! This crate provides the descriptor data model:
//! - `ToolName`: identifier for an external library tool
//! - `LibraryDescriptor`: a library's name, revision, and ordered dependency tools
//! - Recorded revisions of the dataSubselector descriptor
//! - Diffing between descriptor revisions

mod diff;
mod error;
mod revisions;
mod types;

pub use diff::{DescriptorDiff, compute_diff};
pub use error::DescriptorError;
pub use revisions::{DATA_SUBSELECTOR, Revision, data_subselector};
pub use types::{LibraryDescriptor, ToolName};

/// Result type for descriptor operations
pub type Result<T> = std::result::Result<T, DescriptorError>;
