//! Plan computation and application

use serde::Serialize;
use tracing::debug;

use stbuild_descriptor::{LibraryDescriptor, ToolName};

use crate::env::ToolHost;
use crate::generate::GenerateOptions;

/// A single effect to apply to a build environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Register a library into the set of libraries to build
    AddLibrary { name: String },
    /// Configure a dependency tool
    UseTool { tool: ToolName },
}

impl Effect {
    /// Get a human-readable description of the effect
    pub fn description(&self) -> String {
        match self {
            Effect::AddLibrary { name } => format!("add library {}", name),
            Effect::UseTool { tool } => format!("use tool {}", tool),
        }
    }
}

/// An ordered plan of effects for a build environment
///
/// The explicit form of a descriptor evaluation: everything `generate` would
/// do to an environment, as data. Applying the plan replays the effects in
/// order; order is configuration sequencing and is never rearranged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plan {
    /// Effects in application order
    pub effects: Vec<Effect>,
}

impl Plan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the plan has any effects
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Number of effects in the plan
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check whether the plan registers the given library
    pub fn registers(&self, name: &str) -> bool {
        self.effects
            .iter()
            .any(|e| matches!(e, Effect::AddLibrary { name: n } if n == name))
    }

    /// The tools the plan configures, in order
    pub fn tool_order(&self) -> Vec<&ToolName> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::UseTool { tool } => Some(tool),
                Effect::AddLibrary { .. } => None,
            })
            .collect()
    }
}

/// Compute the plan for evaluating a descriptor
///
/// Registration comes first unless `deps_only` suppresses it, followed by one
/// tool configuration per declared dependency in descriptor order. Pure
/// function of its inputs; cannot fail.
pub fn compute_plan(descriptor: &LibraryDescriptor, options: &GenerateOptions) -> Plan {
    let mut plan = Plan::new();

    if !options.deps_only {
        plan.effects.push(Effect::AddLibrary {
            name: descriptor.name.clone(),
        });
    }

    for tool in &descriptor.tools {
        plan.effects.push(Effect::UseTool { tool: tool.clone() });
    }

    plan
}

/// Apply a plan to a build environment
///
/// Replays each effect onto the host in plan order. The host owns all
/// resulting state; the plan is unchanged and can be applied again to a
/// different environment with identical results.
pub fn apply(plan: &Plan, host: &mut dyn ToolHost) {
    for effect in &plan.effects {
        debug!(effect = %effect.description(), "applying effect");

        match effect {
            Effect::AddLibrary { name } => host.add_library(name),
            Effect::UseTool { tool } => host.use_tool(tool),
        }
    }
}
