//! Kotlin accessor generator for the MMKV key-value store.
//!
//! Each schema group becomes one singleton class `{Group}Sp` with one
//! property per item, placed under the package directory of the export dir.

mod generator;
mod renderer;
mod type_mapper;

pub use generator::{FILE_EXTENSION, Generator};
pub use renderer::{MMKV_IMPORT, STORE_ID, render_accessor};
pub use spgen_codegen::{EmitReport, PreviewFile, SpCodegen};
pub use type_mapper::KotlinTypeMapper;
