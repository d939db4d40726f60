//! Per-group rendering context.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use spgen_manifest::{SpConfig, SpGroup};

/// Suffix appended to a group name to form its accessor class name.
pub const CLASS_SUFFIX: &str = "Sp";

/// Format of the generation timestamp embedded in generated files.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %Y-%m-%d";

/// Everything needed to render one group into one file.
///
/// Created fresh for each group right before rendering and owned by the task
/// that renders it. Only `config` and `group` are borrowed, read-only.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub config: &'a SpConfig,
    pub group: &'a SpGroup,
    /// Accessor class name, e.g. "BasicSp"
    pub class_name: String,
    /// File name, e.g. "BasicSp.kt"
    pub file_name: String,
    /// Full output path of the file
    pub file_path: PathBuf,
    pub generated_at: NaiveDateTime,
}

impl<'a> RenderContext<'a> {
    /// Build the context for `group`, placing `{group}Sp.{extension}` in `dir`.
    pub fn new(
        config: &'a SpConfig,
        group: &'a SpGroup,
        dir: &Path,
        extension: &str,
        generated_at: NaiveDateTime,
    ) -> Self {
        let class_name = format!("{}{}", group.name, CLASS_SUFFIX);
        let file_name = format!("{}.{}", class_name, extension);
        let file_path = dir.join(&file_name);

        Self {
            config,
            group,
            class_name,
            file_name,
            file_path,
            generated_at,
        }
    }

    /// Generation timestamp formatted for doc comments.
    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Current local time, the default generation timestamp.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
