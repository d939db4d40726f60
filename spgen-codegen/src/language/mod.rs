//! Generator abstractions.
//!
//! - [`SpCodegen`] - Capability trait every generator implements
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{PreviewFile, SpCodegen};
