//! Report data structures for commands.
//!
//! Operations build reports, then render them to an [`Output`] target.

mod generate;
mod output;
mod scaffold;

pub use generate::{GenerateReport, GenerationResult, PreviewFile};
pub use output::{Report, TerminalOutput};
pub use scaffold::ScaffoldReport;
