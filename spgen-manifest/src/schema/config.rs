use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_AUTHOR: &str = "[spgen]";
const DEFAULT_EXPORT_DIR: &str = ".";
const DEFAULT_NAME_KEY: &str = "nm";
const DEFAULT_TYPE_KEY: &str = "t";
const DEFAULT_COMMENT_KEY: &str = "cm";
const DEFAULT_DEFAULT_KEY: &str = "def";

/// Generation settings from the `[Config]` table.
///
/// Built once per run and passed by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpConfig {
    /// Target package, e.g. "com.example.prefs" (may be empty)
    pub package: String,

    /// Root directory generated files are exported under
    #[serde(rename = "dir")]
    pub export_dir: String,

    /// Author named in generated doc comments
    pub author: String,

    /// Item key holding the preference name
    #[serde(rename = "nameKey")]
    pub name_key: String,

    /// Item key holding the type name
    #[serde(rename = "typeKey")]
    pub type_key: String,

    /// Item key holding the comment
    #[serde(rename = "commentKey")]
    pub comment_key: String,

    /// Item key holding the default value
    #[serde(rename = "defaultKey")]
    pub default_key: String,
}

impl Default for SpConfig {
    fn default() -> Self {
        Self {
            package: String::new(),
            export_dir: DEFAULT_EXPORT_DIR.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            name_key: DEFAULT_NAME_KEY.to_string(),
            type_key: DEFAULT_TYPE_KEY.to_string(),
            comment_key: DEFAULT_COMMENT_KEY.to_string(),
            default_key: DEFAULT_DEFAULT_KEY.to_string(),
        }
    }
}

impl SpConfig {
    /// Replace blank settings with their defaults and trim the rest.
    pub fn with_defaults(mut self) -> Self {
        fn or_default(value: &mut String, default: &str) {
            let trimmed = value.trim();
            *value = if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            };
        }

        self.package = self.package.trim().to_string();
        or_default(&mut self.export_dir, DEFAULT_EXPORT_DIR);
        or_default(&mut self.author, DEFAULT_AUTHOR);
        or_default(&mut self.name_key, DEFAULT_NAME_KEY);
        or_default(&mut self.type_key, DEFAULT_TYPE_KEY);
        or_default(&mut self.comment_key, DEFAULT_COMMENT_KEY);
        or_default(&mut self.default_key, DEFAULT_DEFAULT_KEY);
        self
    }

    /// Package name split into its path segments ("com.a.b" -> ["com", "a", "b"]).
    pub fn package_segments(&self) -> Vec<&str> {
        self.package
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Directory generated files land in: the export dir plus one
    /// subdirectory per package segment.
    pub fn package_dir(&self) -> PathBuf {
        let mut dir = PathBuf::from(&self.export_dir);
        dir.extend(self.package_segments());
        dir
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_default_keys() {
        let config = SpConfig::default();
        assert_eq!(config.name_key, "nm");
        assert_eq!(config.type_key, "t");
        assert_eq!(config.comment_key, "cm");
        assert_eq!(config.default_key, "def");
        assert_eq!(config.author, "[spgen]");
    }

    #[test]
    fn test_with_defaults_fills_blanks() {
        let config = SpConfig {
            package: "  com.a.b ".to_string(),
            export_dir: String::new(),
            author: "  ".to_string(),
            name_key: "name".to_string(),
            ..SpConfig::default()
        }
        .with_defaults();

        assert_eq!(config.package, "com.a.b");
        assert_eq!(config.export_dir, ".");
        assert_eq!(config.author, "[spgen]");
        assert_eq!(config.name_key, "name");
    }

    #[test]
    fn test_package_dir() {
        let config = SpConfig {
            package: "com.a.b".to_string(),
            export_dir: "out".to_string(),
            ..SpConfig::default()
        };
        assert_eq!(config.package_dir(), Path::new("out/com/a/b"));
    }

    #[test]
    fn test_package_dir_without_package() {
        let config = SpConfig {
            export_dir: "out".to_string(),
            ..SpConfig::default()
        };
        assert_eq!(config.package_dir(), Path::new("out"));
        assert!(config.package_segments().is_empty());
    }
}
