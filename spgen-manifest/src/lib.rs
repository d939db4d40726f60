//! Preference schema model and TOML parsing for spgen.
//!
//! A schema file has one reserved `[Config]` table and any number of groups.
//! Every other top-level key names a group whose value is an array of item
//! tables:
//!
//! ```toml
//! [Config]
//! package = "com.example.prefs"
//!
//! [[User]]
//! nm = "user_id"
//! t = "int"
//! cm = "Signed-in user"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use schema::{CONFIG_SECTION, Manifest, SpConfig, SpGroup, SpItem, SpToml, parse_manifest};
