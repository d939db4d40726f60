//! Generator selection.
//!
//! The set of generators is closed: a plan name picks one variant of
//! [`PlanGenerator`], which dispatches to the concrete generator.

use std::{fmt, str::FromStr};

use spgen_codegen::{DiagnosticGenerator, EmitReport, PreviewFile, SpCodegen, SuffixMode};
use spgen_codegen_kotlin::Generator as KotlinGenerator;
use spgen_core::ItemType;
use spgen_manifest::{SpConfig, SpGroup};
use tracing::warn;

/// Output plan named on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Plan {
    /// Print a schema summary to stdout
    #[default]
    Std,
    /// Kotlin accessor classes for MMKV
    AndroidKt,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Std => "std",
            Plan::AndroidKt => "android:kt",
        }
    }

    /// Parse a plan name, falling back to [`Plan::Std`] for unknown names.
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|e: String| {
            warn!("{}, using \"std\" instead", e);
            Plan::Std
        })
    }

    /// Whether this plan writes files (as opposed to printing).
    pub fn writes_files(&self) -> bool {
        matches!(self, Plan::AndroidKt)
    }

    /// Create the generator for this plan.
    pub fn generator(&self, suffix_mode: SuffixMode) -> PlanGenerator {
        match self {
            Plan::Std => PlanGenerator::Diagnostic(
                DiagnosticGenerator::new().with_suffix_mode(suffix_mode),
            ),
            Plan::AndroidKt => {
                PlanGenerator::Kotlin(KotlinGenerator::new().with_suffix_mode(suffix_mode))
            }
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "std" => Ok(Plan::Std),
            "android:kt" | "kt" => Ok(Plan::AndroidKt),
            _ => Err(format!("unknown generator '{}'", s)),
        }
    }
}

/// The generator picked by a [`Plan`].
pub enum PlanGenerator {
    Diagnostic(DiagnosticGenerator),
    Kotlin(KotlinGenerator),
}

impl PlanGenerator {
    fn inner(&self) -> &dyn SpCodegen {
        match self {
            PlanGenerator::Diagnostic(g) => g,
            PlanGenerator::Kotlin(g) => g,
        }
    }
}

impl SpCodegen for PlanGenerator {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn symbol_for(&self, item_type: ItemType) -> &'static str {
        self.inner().symbol_for(item_type)
    }

    fn suffix_mode(&self) -> SuffixMode {
        self.inner().suffix_mode()
    }

    fn coerce(&self, item_type: ItemType, raw: &str) -> String {
        self.inner().coerce(item_type, raw)
    }

    fn preview(&self, config: &SpConfig, groups: &[SpGroup]) -> Vec<PreviewFile> {
        self.inner().preview(config, groups)
    }

    fn generate(&self, config: &SpConfig, groups: &[SpGroup]) -> eyre::Result<EmitReport> {
        self.inner().generate(config, groups)
    }
}
