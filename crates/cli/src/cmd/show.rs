//! Implementation of the `stbuild show` command.
//!
//! Prints a library build descriptor: the library name, its revision, and
//! the dependency tools in configuration order.

use std::path::Path;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::output::{OutputFormat, print_json, print_stat, symbols};

pub fn cmd_show(revision: Option<u32>, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let descriptor = super::load_descriptor(revision, file)?;

    if format.is_json() {
        return print_json(&descriptor);
    }

    println!("Library: {}", descriptor.name);
    print_stat("Revision", &descriptor.revision.to_string());
    print_stat("Tools", &descriptor.tool_count().to_string());
    println!();

    for tool in &descriptor.tools {
        println!(
            "  {} {}",
            symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
            tool
        );
    }

    Ok(())
}
