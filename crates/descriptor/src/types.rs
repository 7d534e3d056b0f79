//! Descriptor types representing a library and its build-time dependencies

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::error::DescriptorError;

/// Name of an external library tool
///
/// A tool is a named configuration unit the build orchestrator invokes to
/// prepare a dependency for use by the current library. The descriptor never
/// checks that the name resolves; that is the orchestrator's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolName(String);

impl ToolName {
    /// Create a new tool name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToolName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ToolName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A library build descriptor
///
/// Declares one library for the build orchestrator: the library's name, its
/// position in the fragment's version history, and the ordered list of tools
/// that must be configured into the build environment. Tool order is
/// configuration sequencing and must be preserved for reproducible builds.
///
/// Descriptors are immutable values constructed fresh each time a build unit
/// is evaluated; they hold no persisted state of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDescriptor {
    /// Name of the library being described
    pub name: String,

    /// Revision of this descriptor in its version history (1-based)
    pub revision: u32,

    /// Dependency tools, in configuration order
    pub tools: Vec<ToolName>,
}

impl LibraryDescriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, revision: u32, tools: Vec<ToolName>) -> Self {
        Self {
            name: name.into(),
            revision,
            tools,
        }
    }

    /// Validate the descriptor's shape
    ///
    /// Checks that the name is non-empty, the revision is 1 or greater, and
    /// no tool appears twice. Tool names are not resolved against anything.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        if self.revision == 0 {
            return Err(DescriptorError::InvalidRevision(self.revision));
        }

        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool) {
                return Err(DescriptorError::DuplicateTool(tool.to_string()));
            }
        }

        Ok(())
    }

    /// Number of dependency tools declared
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Check whether a tool is declared as a dependency
    pub fn declares(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t.as_str() == tool)
    }

    /// Load a descriptor from a JSON file, validating after parse
    pub fn from_file(path: &Path) -> Result<Self, DescriptorError> {
        let contents = std::fs::read_to_string(path)?;
        let descriptor: Self = serde_json::from_str(&contents)?;
        descriptor.validate()?;

        debug!(
            library = %descriptor.name,
            path = %path.display(),
            "loaded descriptor file"
        );
        Ok(descriptor)
    }

    /// Serialize the descriptor to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, DescriptorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
