//! Scaffold report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report from writing a starter schema.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Path of the new schema file.
    pub path: PathBuf,
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Created", &self.path.display().to_string());
        out.preformatted(&format!(
            "Edit it, then run 'spgen {} -o android:kt'",
            self.path.display()
        ));
    }
}
