//! Preference item types and their mapping to target-language symbols.

/// Type of a single preference item.
///
/// Unknown type names never fail: they resolve to [`ItemType::None`], which
/// generators render as a sentinel symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// Missing or unrecognised type name
    #[default]
    None,
    Int,
    Long,
    Float,
    String,
}

impl ItemType {
    /// Resolve a schema type name. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "int" => ItemType::Int,
            "long" => ItemType::Long,
            "float" => ItemType::Float,
            "string" => ItemType::String,
            _ => ItemType::None,
        }
    }
}

/// Trait for mapping item types to target-specific type symbols.
///
/// The mapping is total: [`ItemType::None`] maps to a sentinel chosen by the
/// implementation instead of failing.
pub trait TypeMapper {
    /// Map an item type to its symbol
    fn map_item_type(&self, item_type: ItemType) -> &'static str;
}
