//! Shared code generation utilities for the spgen generator.
//!
//! Target-specific generators (e.g. `spgen-codegen-kotlin`) build on the
//! pieces collected here.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building ([`CodeBuilder`])
//! - [`coerce`] - Default-value coercion into literal syntax
//! - [`context`] - Per-group [`RenderContext`]
//! - [`emit`] - Concurrent per-group file emission
//! - [`language`] - The [`SpCodegen`] capability trait
//! - [`diagnostic`] - Plain-text schema summary generator
//! - [`generation`] - Scaffold files

pub mod builder;
pub mod coerce;
pub mod context;
pub mod diagnostic;
pub mod emit;
pub mod generation;
pub mod language;

pub use builder::CodeBuilder;
pub use coerce::{SuffixMode, coerce_default};
pub use context::{CLASS_SUFFIX, RenderContext, TIMESTAMP_FORMAT};
pub use diagnostic::{DiagnosticGenerator, DiagnosticTypeMapper};
pub use emit::{EmitFailure, EmitReport, emit_concurrently};
pub use language::{PreviewFile, SpCodegen};
