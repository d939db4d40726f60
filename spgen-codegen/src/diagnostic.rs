//! Plain-text schema summary generator.
//!
//! Prints every group and item to standard output and touches no files.

use std::io::{self, Write};

use eyre::WrapErr;
use spgen_core::{ItemType, TypeMapper};
use spgen_manifest::{SpConfig, SpGroup, SpItem};

use crate::{EmitReport, PreviewFile, SpCodegen, SuffixMode};

/// Type mapper with a loud sentinel for unknown types.
pub struct DiagnosticTypeMapper;

impl TypeMapper for DiagnosticTypeMapper {
    fn map_item_type(&self, item_type: ItemType) -> &'static str {
        match item_type {
            ItemType::None => "UnknownType",
            ItemType::Int => "Int",
            ItemType::Long => "Long",
            ItemType::Float => "Float",
            ItemType::String => "String",
        }
    }
}

/// Generator that writes a human-readable summary of the schema.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticGenerator {
    suffix_mode: SuffixMode,
}

impl DiagnosticGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suffix_mode(mut self, suffix_mode: SuffixMode) -> Self {
        self.suffix_mode = suffix_mode;
        self
    }

    /// Write the summary to `out`.
    pub fn write_summary(
        &self,
        out: &mut impl Write,
        config: &SpConfig,
        groups: &[SpGroup],
    ) -> io::Result<()> {
        writeln!(out, "Config:")?;
        writeln!(out, "   package: {}", config.package)?;
        writeln!(out, "   toDir: {}", config.export_dir)?;
        for group in groups {
            writeln!(out, "Group: {} total: {}", group.name, group.items.len())?;
            for item in &group.items {
                writeln!(out, "    item {}", self.item_line(item))?;
            }
        }
        Ok(())
    }

    /// Render the summary into a string.
    pub fn summary(&self, config: &SpConfig, groups: &[SpGroup]) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_summary(&mut buf, config, groups);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// `[ accessor(key default) Type  : comment ]`, default omitted when empty.
    fn item_line(&self, item: &SpItem) -> String {
        let mut line = format!("[ {}({}", item.accessor_name(), item.name);
        let value = self.coerce(item.item_type, &item.default_value);
        if !value.is_empty() {
            line.push(' ');
            line.push_str(&value);
        }
        line.push_str(&format!(
            ") {}  : {} ]",
            self.symbol_for(item.item_type),
            item.comment
        ));
        line
    }
}

impl SpCodegen for DiagnosticGenerator {
    fn name(&self) -> &'static str {
        "std"
    }

    fn symbol_for(&self, item_type: ItemType) -> &'static str {
        DiagnosticTypeMapper.map_item_type(item_type)
    }

    fn suffix_mode(&self) -> SuffixMode {
        self.suffix_mode
    }

    fn preview(&self, config: &SpConfig, groups: &[SpGroup]) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: "<stdout>".to_string(),
            content: self.summary(config, groups),
        }]
    }

    fn generate(&self, config: &SpConfig, groups: &[SpGroup]) -> eyre::Result<EmitReport> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_summary(&mut out, config, groups)
            .and_then(|()| out.flush())
            .wrap_err("failed to write schema summary")?;
        Ok(EmitReport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (SpConfig, Vec<SpGroup>) {
        let config = SpConfig {
            package: "com.a.b".to_string(),
            export_dir: "./out".to_string(),
            ..SpConfig::default()
        };
        let groups = vec![
            SpGroup::new("Basic")
                .with_item(SpItem::new("user_id", ItemType::Int).with_comment("The user"))
                .with_item(
                    SpItem::new("Token", ItemType::String)
                        .with_comment("Auth")
                        .with_default("abc"),
                ),
            SpGroup::new("Adv").with_item(SpItem::new("mystery", ItemType::None)),
        ];
        (config, groups)
    }

    #[test]
    fn test_summary_format() {
        let (config, groups) = sample();

        let summary = DiagnosticGenerator::new().summary(&config, &groups);

        assert_eq!(
            summary,
            "Config:\n\
             \x20  package: com.a.b\n\
             \x20  toDir: ./out\n\
             Group: Basic total: 2\n\
             \x20   item [ userId(user_id 0) Int  : The user ]\n\
             \x20   item [ Token(Token \"abc\") String  : Auth ]\n\
             Group: Adv total: 1\n\
             \x20   item [ mystery(mystery) UnknownType  :  ]\n"
        );
    }

    #[test]
    fn test_symbols_use_loud_sentinel() {
        let generator = DiagnosticGenerator::new();
        assert_eq!(generator.symbol_for(ItemType::None), "UnknownType");
        assert_eq!(generator.symbol_for(ItemType::Long), "Long");
    }

    #[test]
    fn test_suffix_mode_applies() {
        let generator = DiagnosticGenerator::new().with_suffix_mode(SuffixMode::Normalize);
        assert_eq!(generator.coerce(ItemType::Long, "5L"), "5L");
        assert_eq!(DiagnosticGenerator::new().coerce(ItemType::Long, "5L"), "5LL");
    }

    #[test]
    fn test_preview_is_single_summary() {
        let (config, groups) = sample();
        let files = DiagnosticGenerator::new().preview(&config, &groups);

        assert_eq!(files.len(), 1);
        assert!(files[0].content.starts_with("Config:\n"));
    }
}
