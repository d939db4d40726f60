use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A schema file on disk with its parsed manifest.
pub struct SpToml {
    path: PathBuf,
    manifest: Manifest,
}

impl SpToml {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
