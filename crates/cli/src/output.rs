//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored
//! status symbols and the text/JSON output switch.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

pub mod symbols {
    pub const SUCCESS: &str = "✓";
    pub const INFO: &str = "•";
    pub const ARROW: &str = "→";
    pub const PLUS: &str = "+";
    pub const MINUS: &str = "-";
    pub const TILDE: &str = "~";
}

pub fn print_success(message: &str) {
    println!(
        "{} {}",
        symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
        message
    );
}

pub fn print_stat(label: &str, value: &str) {
    println!(
        "  {}: {}",
        label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        value
    );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}
