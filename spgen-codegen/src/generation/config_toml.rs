//! Starter schema written by `spgen --new`.

use std::path::{Path, PathBuf};

use spgen_core::{FileRules, GeneratedFile};

/// File name used when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Commented starter schema.
pub const CONFIG_TEMPLATE: &str = r#"# "Config" is the reserved table holding generation settings.

[Config]
package = "com.example.prefs"
dir = "./exportDir"
#author = "[Author name or empty]"
#nameKey = "nm"
#typeKey = "t"
#commentKey = "cm"
#defaultKey = "def"

# === Preference groups ===
# Every other top-level name is a group; each [[Group]] entry is one item.
# nm: name, t: type [int, long, float, string], cm: comment, def: default value

[[Group1]]
nm = "item_name1"
t = "int"
cm = "Comment1"

[[Group1]]
nm = "item_name2"
t = "string"
cm = "Comment2"
def = "hello"

[[Group2]]
nm = "item_name3"
t = "float"
cm = "Comment3"
def = 0.5
"#;

/// The starter schema file. Never overwrites an existing file.
pub struct ConfigToml {
    file: PathBuf,
}

impl ConfigToml {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }
}

impl Default for ConfigToml {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl GeneratedFile for ConfigToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file)
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        CONFIG_TEMPLATE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use spgen_core::{ItemType, WriteResult};
    use spgen_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_template_parses() {
        let manifest = Manifest::from_str(CONFIG_TEMPLATE).unwrap();

        assert_eq!(manifest.config.package, "com.example.prefs");
        let names: Vec<_> = manifest.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Group1", "Group2"]);
        assert_eq!(manifest.groups[0].items[1].item_type, ItemType::String);
        assert_eq!(manifest.groups[1].items[0].default_value, "0.5");
    }

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();

        let result = ConfigToml::default().write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let content = fs::read_to_string(temp.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_write_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mine.toml");
        fs::write(&path, "# mine").unwrap();

        let result = ConfigToml::new("mine.toml").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");
    }
}
