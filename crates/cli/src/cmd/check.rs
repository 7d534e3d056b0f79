//! Implementation of the `stbuild check` command.
//!
//! Runs the existence probe against a fresh environment and reports whether
//! the descriptor module is usable.

use anyhow::Result;

use stbuild_core::{BuildEnv, exists};

use crate::output::{OutputFormat, print_json, print_success};

pub fn cmd_check(format: OutputFormat) -> Result<()> {
    let env = BuildEnv::new();
    let available = exists(&env);

    if format.is_json() {
        return print_json(&serde_json::json!({ "available": available }));
    }

    print_success("descriptor available");

    Ok(())
}
