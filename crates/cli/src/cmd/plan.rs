//! Implementation of the `stbuild plan` command.
//!
//! Computes the ordered effect list for a descriptor, replays it into a
//! fresh recording environment, and prints both.

use std::path::Path;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use tracing::info;

use stbuild_core::{BuildEnv, Effect, GenerateOptions, apply, compute_plan};

use crate::output::{OutputFormat, print_json, symbols};

pub fn cmd_plan(
    revision: Option<u32>,
    file: Option<&Path>,
    deps_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let descriptor = super::load_descriptor(revision, file)?;

    let options = GenerateOptions { deps_only };
    let plan = compute_plan(&descriptor, &options);

    if format.is_json() {
        return print_json(&plan);
    }

    println!("Plan for {} (revision {})", descriptor.name, descriptor.revision);
    println!();

    for effect in &plan.effects {
        let symbol = match effect {
            Effect::AddLibrary { .. } => symbols::PLUS.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
            Effect::UseTool { .. } => symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string(),
        };
        println!("  {} {}", symbol, effect.description());
    }

    let mut env = BuildEnv::new();
    apply(&plan, &mut env);
    info!(library = %descriptor.name, effects = plan.len(), "plan applied to fresh environment");

    println!();
    println!("Environment: {}", env.summary());

    Ok(())
}
