//! Kotlin type mapper implementation.

use spgen_core::{ItemType, TypeMapper};

/// Kotlin type mapper.
///
/// Unknown types map to `Unit` so malformed schemas still yield a valid
/// type name.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn map_item_type(&self, item_type: ItemType) -> &'static str {
        match item_type {
            ItemType::None => "Unit",
            ItemType::Int => "Int",
            ItemType::Long => "Long",
            ItemType::Float => "Float",
            ItemType::String => "String",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kotlin_type_mapper() {
        let mapper = KotlinTypeMapper;

        assert_eq!(mapper.map_item_type(ItemType::Int), "Int");
        assert_eq!(mapper.map_item_type(ItemType::Long), "Long");
        assert_eq!(mapper.map_item_type(ItemType::Float), "Float");
        assert_eq!(mapper.map_item_type(ItemType::String), "String");
        assert_eq!(mapper.map_item_type(ItemType::None), "Unit");
    }
}
