//! Build environment accumulator

use serde::Serialize;
use std::fmt;

use stbuild_descriptor::ToolName;

/// Operations a build environment exposes to descriptors
///
/// This is the seam to the external orchestrator: descriptors mutate the
/// environment only through these two calls, and the environment is held by
/// exclusive reference for the duration of an apply. Resolving tool names and
/// reacting to unknown ones is the host's responsibility.
pub trait ToolHost {
    /// Add a library to the set of libraries to build
    fn add_library(&mut self, name: &str);

    /// Configure a dependency tool into the environment
    fn use_tool(&mut self, tool: &ToolName);
}

/// A recording build environment
///
/// Accumulates library registrations and the ordered log of tool
/// configurations. Construct one fresh per evaluation; it shares no state
/// with any other environment.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BuildEnv {
    /// Libraries registered for building
    libraries: Vec<String>,

    /// Tools configured, in invocation order
    tools: Vec<ToolName>,
}

impl BuildEnv {
    /// Create a new empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a library has been registered for building
    pub fn is_registered(&self, name: &str) -> bool {
        self.libraries.iter().any(|l| l == name)
    }

    /// Number of times a library has been registered
    pub fn registration_count(&self, name: &str) -> usize {
        self.libraries.iter().filter(|l| *l == name).count()
    }

    /// Libraries registered for building, in registration order
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    /// Tools configured so far, in invocation order
    pub fn tool_log(&self) -> &[ToolName] {
        &self.tools
    }

    /// Check if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty() && self.tools.is_empty()
    }

    /// Get a summary of what the environment has accumulated
    pub fn summary(&self) -> EnvSummary {
        EnvSummary {
            library_count: self.libraries.len(),
            tool_count: self.tools.len(),
        }
    }
}

impl ToolHost for BuildEnv {
    fn add_library(&mut self, name: &str) {
        self.libraries.push(name.to_string());
    }

    fn use_tool(&mut self, tool: &ToolName) {
        self.tools.push(tool.clone());
    }
}

/// Summary statistics for a build environment
#[derive(Debug)]
pub struct EnvSummary {
    pub library_count: usize,
    pub tool_count: usize,
}

impl fmt::Display for EnvSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} libraries, {} tools",
            self.library_count, self.tool_count
        )
    }
}
