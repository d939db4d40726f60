//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};
use crate::plan::Plan;

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Plan that ran.
    pub plan: Plan,

    /// Number of groups in the schema.
    pub group_count: usize,

    /// What the run produced.
    pub result: GenerationResult,

    /// One message per group that failed.
    pub failures: Vec<String>,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The generator printed its output directly.
    Printed,
    /// Files were written to disk.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Printed => {}
            GenerationResult::Written(files) => {
                out.key_value(
                    "Generated",
                    &format!("{} of {} groups ({})", files.len(), self.group_count, self.plan),
                );
                for file in files {
                    out.added_item(&file.display().to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }

        if !self.failures.is_empty() {
            out.newline();
            for failure in &self.failures {
                out.warning(failure);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written_with_failure() {
        let report = GenerateReport {
            plan: Plan::AndroidKt,
            group_count: 2,
            result: GenerationResult::Written(vec![PathBuf::from("out/UserSp.kt")]),
            failures: vec!["Settings (out/SettingsSp.kt): failed to write".to_string()],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Generated: 1 of 2 groups (android:kt)".to_string(),
                "+ out/UserSp.kt".to_string(),
                String::new(),
                "warning: Settings (out/SettingsSp.kt): failed to write".to_string(),
            ]
        );
        assert!(!report.is_success());
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            plan: Plan::Std,
            group_count: 1,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "<stdout>".to_string(),
                content: "Group: User total: 0".to_string(),
            }]),
            failures: Vec::new(),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "-- <stdout> --");
        assert_eq!(out.lines[1], "Group: User total: 0");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }

    #[test]
    fn test_render_printed_is_silent() {
        let report = GenerateReport {
            plan: Plan::Std,
            group_count: 3,
            result: GenerationResult::Printed,
            failures: Vec::new(),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(out.lines.is_empty());
    }
}
