//! Generate operation - accessor output from a parsed schema.

use eyre::{Context, Result};
use spgen_codegen::{SpCodegen, SuffixMode};
use spgen_manifest::Manifest;
use tracing::info;

use crate::{
    plan::Plan,
    reports::{GenerateReport, GenerationResult, PreviewFile},
};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Output plan to run.
    pub plan: Plan,
    /// Long/Float suffix handling.
    pub suffix_mode: SuffixMode,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the plan's generator over every group in the manifest. Per-group
/// failures end up in the report rather than aborting the run.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = opts.plan.generator(opts.suffix_mode);
    info!(
        plan = generator.name(),
        groups = manifest.groups.len(),
        items = manifest.item_count(),
        "generating"
    );

    let mut failures = Vec::new();
    let result = if opts.dry_run {
        let files = generator
            .preview(&manifest.config, &manifest.groups)
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let emitted = generator
            .generate(&manifest.config, &manifest.groups)
            .wrap_err("Failed to generate code")?;
        failures = emitted
            .failures
            .iter()
            .map(|f| format!("{} ({}): {:#}", f.group, f.path.display(), f.error))
            .collect();
        if opts.plan.writes_files() {
            GenerationResult::Written(emitted.written)
        } else {
            GenerationResult::Printed
        }
    };

    Ok(GenerateReport {
        plan: opts.plan,
        group_count: manifest.groups.len(),
        result,
        failures,
    })
}
