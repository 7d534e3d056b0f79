//! Recorded revisions of the dataSubselector descriptor
//!
//! The dataSubselector build fragment is changelog-tracked: two revisions of
//! its dependency list exist, and the later one supersedes the earlier. Both
//! stay addressable so the history can be inspected and diffed.

use crate::error::DescriptorError;
use crate::types::{LibraryDescriptor, ToolName};

/// Name of the library this crate ships recorded descriptors for
pub const DATA_SUBSELECTOR: &str = "dataSubselector";

/// A recorded revision of the dataSubselector descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Revision {
    /// Initial dependency list
    R1,
    /// Adds irfLoaderLib ahead of evtbinLib
    R2,
}

impl Revision {
    /// All recorded revisions, oldest first
    pub const ALL: [Revision; 2] = [Revision::R1, Revision::R2];

    /// The most recent recorded revision
    pub const fn latest() -> Self {
        Revision::R2
    }

    /// The revision number as stored in the descriptor
    pub const fn number(self) -> u32 {
        match self {
            Revision::R1 => 1,
            Revision::R2 => 2,
        }
    }

    /// Look up a recorded revision by number
    pub fn from_number(number: u32) -> Result<Self, DescriptorError> {
        match number {
            1 => Ok(Revision::R1),
            2 => Ok(Revision::R2),
            other => Err(DescriptorError::UnknownRevision(
                other,
                DATA_SUBSELECTOR.to_string(),
            )),
        }
    }
}

/// Build the dataSubselector descriptor at the given revision
///
/// Tool order is exactly as recorded; the orchestrator relies on it for
/// configuration sequencing.
pub fn data_subselector(revision: Revision) -> LibraryDescriptor {
    let tools: Vec<ToolName> = match revision {
        Revision::R1 => vec![
            ToolName::from("tipLib"),
            ToolName::from("astroLib"),
            ToolName::from("st_facilitiesLib"),
            ToolName::from("facilitiesLib"),
            ToolName::from("evtbinLib"),
        ],
        Revision::R2 => vec![
            ToolName::from("tipLib"),
            ToolName::from("astroLib"),
            ToolName::from("st_facilitiesLib"),
            ToolName::from("facilitiesLib"),
            ToolName::from("irfLoaderLib"),
            ToolName::from("evtbinLib"),
        ],
    };

    LibraryDescriptor::new(DATA_SUBSELECTOR, revision.number(), tools)
}

impl LibraryDescriptor {
    /// The current dataSubselector descriptor (latest recorded revision)
    pub fn current() -> Self {
        data_subselector(Revision::latest())
    }
}
