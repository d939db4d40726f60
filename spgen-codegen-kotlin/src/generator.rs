use std::path::PathBuf;

use chrono::NaiveDateTime;
use spgen_codegen::{
    EmitReport, PreviewFile, RenderContext, SpCodegen, SuffixMode, context, emit_concurrently,
};
use spgen_core::{ItemType, TypeMapper, ensure_dir};
use spgen_manifest::{SpConfig, SpGroup};
use tracing::{info, warn};

use crate::{KotlinTypeMapper, render_accessor};

/// Extension of generated files.
pub const FILE_EXTENSION: &str = "kt";

/// Kotlin code generator producing one MMKV accessor class per group
#[derive(Debug, Clone, Default)]
pub struct Generator {
    suffix_mode: SuffixMode,
    generated_at: Option<NaiveDateTime>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suffix_mode(mut self, suffix_mode: SuffixMode) -> Self {
        self.suffix_mode = suffix_mode;
        self
    }

    /// Pin the timestamp written into generated files instead of using the
    /// current local time.
    pub fn with_timestamp(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.generated_at.unwrap_or_else(context::now)
    }

    /// Absolute package directory files are written to.
    pub fn output_dir(&self, config: &SpConfig) -> PathBuf {
        let dir = config.package_dir();
        std::path::absolute(&dir).unwrap_or(dir)
    }

    fn contexts<'a>(
        &self,
        config: &'a SpConfig,
        groups: &'a [SpGroup],
        dir: &std::path::Path,
    ) -> Vec<RenderContext<'a>> {
        // One timestamp per run so every file carries the same header.
        let generated_at = self.timestamp();
        groups
            .iter()
            .map(|group| RenderContext::new(config, group, dir, FILE_EXTENSION, generated_at))
            .collect()
    }
}

impl SpCodegen for Generator {
    fn name(&self) -> &'static str {
        "android:kt"
    }

    fn symbol_for(&self, item_type: ItemType) -> &'static str {
        KotlinTypeMapper.map_item_type(item_type)
    }

    fn suffix_mode(&self) -> SuffixMode {
        self.suffix_mode
    }

    fn preview(&self, config: &SpConfig, groups: &[SpGroup]) -> Vec<PreviewFile> {
        self.contexts(config, groups, &self.output_dir(config))
            .iter()
            .map(|ctx| PreviewFile {
                path: ctx.file_path.display().to_string(),
                content: render_accessor(ctx, self.suffix_mode),
            })
            .collect()
    }

    fn generate(&self, config: &SpConfig, groups: &[SpGroup]) -> eyre::Result<EmitReport> {
        let dir = self.output_dir(config);
        // Best effort: a failure here surfaces again as per-group write errors.
        if let Err(e) = ensure_dir(&dir) {
            warn!(dir = %dir.display(), "could not create package directory: {:#}", e);
        }

        info!(groups = groups.len(), dir = %dir.display(), "generating Kotlin accessors");
        let contexts = self.contexts(config, groups, &dir);
        Ok(emit_concurrently(contexts, |ctx| {
            render_accessor(ctx, self.suffix_mode)
        }))
    }
}
