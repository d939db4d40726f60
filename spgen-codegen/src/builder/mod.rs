//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
use indent::Indent;
