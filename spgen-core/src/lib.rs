//! Core types and utilities for the spgen preference accessor generator.
//!
//! This crate holds the pieces every other spgen crate agrees on: the
//! preference item type system, accessor naming and generated-file writing.

mod file;
mod item_type;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult, ensure_dir};
// Fundamental types
pub use item_type::{ItemType, TypeMapper};
// String utilities
pub use utils::{to_accessor_name, toml_value_to_string};
