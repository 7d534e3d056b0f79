//! stbuild-core: Core logic for stbuild
//!
//! This crate provides the build-environment side of the descriptor
//! contract: the `ToolHost` seam to the orchestrator, a recording
//! `BuildEnv`, plan computation, and the `generate`/`exists` plugin surface.

mod env;
mod generate;
mod plan;

pub use env::{BuildEnv, EnvSummary, ToolHost};
pub use generate::{GenerateOptions, exists, generate};
pub use plan::{Effect, Plan, apply, compute_plan};

// Re-export types from stbuild-descriptor for convenience
pub use stbuild_descriptor::{LibraryDescriptor, Revision, ToolName, data_subselector};
