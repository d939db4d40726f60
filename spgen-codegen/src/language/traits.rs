//! Generator capability trait.

use spgen_core::ItemType;
use spgen_manifest::{SpConfig, SpGroup};

use crate::{EmitReport, SuffixMode, coerce_default};

/// A preference accessor generator.
///
/// Implementations map item types to symbols, coerce defaults into literals
/// and turn a parsed schema into output, either files on disk or a printed
/// summary.
pub trait SpCodegen {
    /// Generator identifier (e.g., "std", "android:kt")
    fn name(&self) -> &'static str;

    /// Symbol for an item type. Total: unknown types map to a sentinel.
    fn symbol_for(&self, item_type: ItemType) -> &'static str;

    /// How Long/Float suffixes are applied during coercion.
    fn suffix_mode(&self) -> SuffixMode {
        SuffixMode::Append
    }

    /// Coerce a raw default into a literal.
    fn coerce(&self, item_type: ItemType, raw: &str) -> String {
        coerce_default(item_type, raw, self.suffix_mode())
    }

    /// Render output without side effects.
    fn preview(&self, config: &SpConfig, groups: &[SpGroup]) -> Vec<PreviewFile>;

    /// Produce output for every group.
    ///
    /// Per-group failures are collected in the returned report; an `Err` is
    /// reserved for failures that affect the whole run.
    fn generate(&self, config: &SpConfig, groups: &[SpGroup]) -> eyre::Result<EmitReport>;
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path the file would be written to
    pub path: String,
    /// File content
    pub content: String,
}
