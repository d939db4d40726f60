use spgen_core::{ItemType, to_accessor_name};

/// A named collection of preference items. Maps to exactly one generated
/// accessor class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpGroup {
    pub name: String,
    pub items: Vec<SpItem>,
}

impl SpGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: SpItem) -> Self {
        self.items.push(item);
        self
    }
}

/// A single typed preference field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpItem {
    /// Raw storage key, used verbatim in generated code
    pub name: String,
    pub item_type: ItemType,
    pub comment: String,
    /// Untyped default awaiting coercion; empty when not given
    pub default_value: String,
}

impl SpItem {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Property name derived from the raw key.
    pub fn accessor_name(&self) -> String {
        to_accessor_name(&self.name)
    }
}
