//! Core operations.
//!
//! This module contains the business logic for spgen,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod scaffold;

pub use generate::{GenerateOptions, generate};
pub use scaffold::scaffold;
