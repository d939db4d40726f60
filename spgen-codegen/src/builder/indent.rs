//! Indentation for generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// 4-space indentation used by Kotlin sources.
    pub const KOTLIN: Self = Self("    ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}
