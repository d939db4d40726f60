//! Schema types and parsing for preference schema files.

mod config;
mod file;
mod group;
mod parse;

pub use config::SpConfig;
pub use file::SpToml;
pub use group::{SpGroup, SpItem};
pub use parse::parse_manifest;

/// Reserved top-level table holding generation settings.
pub const CONFIG_SECTION: &str = "Config";

/// A parsed schema: generation settings plus groups in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    /// Settings from the `[Config]` table, defaults applied
    pub config: SpConfig,

    /// Groups in the order they appear in the file
    pub groups: Vec<SpGroup>,
}

impl Manifest {
    /// Total number of items across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}
