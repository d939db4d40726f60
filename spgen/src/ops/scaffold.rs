//! Scaffold operation - write a starter schema.

use std::path::Path;

use eyre::{Result, bail};
use spgen_codegen::generation::ConfigToml;
use spgen_core::{GeneratedFile, WriteResult};
use tracing::info;

use crate::reports::ScaffoldReport;

/// Write the starter schema to `path`, refusing to replace an existing file.
pub fn scaffold(path: &Path) -> Result<ScaffoldReport> {
    match ConfigToml::new(path).write(Path::new(""))? {
        WriteResult::Written => {
            info!(path = %path.display(), "wrote starter schema");
            Ok(ScaffoldReport {
                path: path.to_path_buf(),
            })
        }
        WriteResult::Skipped => bail!("'{}' already exists", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use spgen_codegen::generation::CONFIG_TEMPLATE;
    use spgen_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_writes_parseable_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let report = scaffold(&path).unwrap();

        assert_eq!(report.path, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
        let manifest: Manifest = content.parse().unwrap();
        assert!(!manifest.groups.is_empty());
    }

    #[test]
    fn test_refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "keep me").unwrap();

        let err = scaffold(&path).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/prefs.toml");

        scaffold(&path).unwrap();

        assert!(path.exists());
    }
}
