//! Diff computation between descriptor revisions
//!
//! This module compares two library build descriptors and reports which
//! dependency tools were added, removed, or retained, and whether the
//! retained tools changed relative order.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{LibraryDescriptor, ToolName};

/// Diff between two descriptor revisions
///
/// Describes how the dependency list changed from one revision to another.
/// Tool vectors preserve descriptor order: `added` follows the newer
/// descriptor, `removed` follows the older one.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DescriptorDiff {
    /// Tools in the newer descriptor but not the older
    pub added: Vec<ToolName>,

    /// Tools in the older descriptor but not the newer
    pub removed: Vec<ToolName>,

    /// Tools present in both
    pub retained: Vec<ToolName>,

    /// True if the retained tools appear in a different relative order
    pub reordered: bool,

    /// Set when the two descriptors name different libraries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed: Option<(String, String)>,
}

impl DescriptorDiff {
    /// Returns true if the dependency lists are identical
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && !self.reordered && self.renamed.is_none()
    }

    /// Total number of tool changes (additions plus removals)
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len()
    }
}

/// Compute the diff from one descriptor to another
///
/// # Arguments
///
/// * `from` - The older descriptor
/// * `to` - The newer descriptor
pub fn compute_diff(from: &LibraryDescriptor, to: &LibraryDescriptor) -> DescriptorDiff {
    let mut diff = DescriptorDiff::default();

    if from.name != to.name {
        diff.renamed = Some((from.name.clone(), to.name.clone()));
    }

    let from_tools: HashSet<&ToolName> = from.tools.iter().collect();
    let to_tools: HashSet<&ToolName> = to.tools.iter().collect();

    // Added: in the newer list but not the older, in the newer list's order
    for tool in &to.tools {
        if !from_tools.contains(tool) {
            diff.added.push(tool.clone());
        }
    }

    // Removed: in the older list but not the newer, in the older list's order
    for tool in &from.tools {
        if !to_tools.contains(tool) {
            diff.removed.push(tool.clone());
        }
    }

    // Retained: in both, in the newer list's order
    for tool in &to.tools {
        if from_tools.contains(tool) {
            diff.retained.push(tool.clone());
        }
    }

    // Relative order of retained tools in the older list
    let retained_in_from: Vec<&ToolName> = from
        .tools
        .iter()
        .filter(|t| to_tools.contains(*t))
        .collect();
    diff.reordered = retained_in_from
        .iter()
        .zip(diff.retained.iter())
        .any(|(a, b)| *a != b);

    diff
}
