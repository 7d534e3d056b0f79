//! Implementation of the `stbuild diff` command.
//!
//! Compares two recorded descriptor revisions and displays added, removed,
//! and retained dependency tools.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use stbuild_descriptor::{Revision, compute_diff, data_subselector};

use crate::output::{OutputFormat, print_json, symbols};

pub fn cmd_diff(from: u32, to: u32, format: OutputFormat) -> Result<()> {
    let from_descriptor = data_subselector(Revision::from_number(from)?);
    let to_descriptor = data_subselector(Revision::from_number(to)?);

    let diff = compute_diff(&from_descriptor, &to_descriptor);

    if format.is_json() {
        let output = serde_json::json!({
            "from": from_descriptor,
            "to": to_descriptor,
            "diff": diff,
        });
        return print_json(&output);
    }

    println!(
        "Comparing {} revision {} {} {}",
        from_descriptor.name,
        from,
        symbols::ARROW,
        to
    );
    println!();

    if diff.is_empty() {
        println!("No changes.");
        return Ok(());
    }

    for tool in &diff.added {
        println!(
            "  {} {} added",
            symbols::PLUS.if_supports_color(Stream::Stdout, |s| s.green()),
            tool
        );
    }

    for tool in &diff.removed {
        println!(
            "  {} {} removed",
            symbols::MINUS.if_supports_color(Stream::Stdout, |s| s.red()),
            tool
        );
    }

    if diff.reordered {
        println!(
            "  {} retained tools reordered",
            symbols::TILDE.if_supports_color(Stream::Stdout, |s| s.yellow())
        );
    }

    if let Some((old_name, new_name)) = &diff.renamed {
        println!(
            "  {} renamed {} {} {}",
            symbols::TILDE.if_supports_color(Stream::Stdout, |s| s.yellow()),
            old_name,
            symbols::ARROW,
            new_name
        );
    }

    println!();
    println!(
        "{} changed, {} unchanged",
        diff.change_count(),
        diff.retained.len()
    );

    Ok(())
}
