mod check;
mod diff;
mod plan;
mod show;

pub use check::cmd_check;
pub use diff::cmd_diff;
pub use plan::cmd_plan;
pub use show::cmd_show;

use std::path::Path;

use anyhow::{Context, Result};

use stbuild_descriptor::{LibraryDescriptor, Revision, data_subselector};

/// Resolve the descriptor a command should operate on.
///
/// A `--file` path wins over `--revision`; with neither, the latest recorded
/// revision is used.
fn load_descriptor(revision: Option<u32>, file: Option<&Path>) -> Result<LibraryDescriptor> {
    if let Some(path) = file {
        return LibraryDescriptor::from_file(path)
            .with_context(|| format!("Failed to load descriptor: {}", path.display()));
    }

    match revision {
        Some(number) => {
            let revision = Revision::from_number(number)?;
            Ok(data_subselector(revision))
        }
        None => Ok(LibraryDescriptor::current()),
    }
}
