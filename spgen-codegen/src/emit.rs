//! Concurrent per-group file emission.
//!
//! Each group is rendered and written on its own thread. The driver returns
//! only after every task has finished, successfully or not; one group's
//! failure never affects another.

use std::{path::PathBuf, thread};

use eyre::{Report, eyre};
use spgen_core::File;
use tracing::{debug, warn};

use crate::RenderContext;

/// A group whose file could not be produced.
#[derive(Debug)]
pub struct EmitFailure {
    pub group: String,
    pub path: PathBuf,
    pub error: Report,
}

/// Outcome of one emission run.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Files written, in group order
    pub written: Vec<PathBuf>,
    /// Groups that failed, in group order
    pub failures: Vec<EmitFailure>,
}

impl EmitReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render and write every context concurrently, one thread per context.
///
/// `render` is shared read-only across tasks; each task owns its context.
/// Write failures and panics are collected into the report instead of being
/// propagated.
pub fn emit_concurrently<F>(contexts: Vec<RenderContext<'_>>, render: F) -> EmitReport
where
    F: Fn(&RenderContext<'_>) -> String + Sync,
{
    let render = &render;

    let outcomes: Vec<(String, PathBuf, eyre::Result<()>)> = thread::scope(|scope| {
        let tasks: Vec<_> = contexts
            .into_iter()
            .enumerate()
            .map(|(index, ctx)| {
                let group = ctx.group.name.clone();
                let path = ctx.file_path.clone();
                // Group names may hold bytes a thread name rejects.
                let handle = thread::Builder::new()
                    .name(format!("spgen-{}", index))
                    .spawn_scoped(scope, move || {
                        debug!(group = %ctx.group.name, path = %ctx.file_path.display(), "rendering group");
                        let content = render(&ctx);
                        File::new(&ctx.file_path, content).write().map(|_| ())
                    });
                (group, path, handle)
            })
            .collect();

        tasks
            .into_iter()
            .map(|(group, path, handle)| {
                let result = match handle {
                    Ok(handle) => handle
                        .join()
                        .unwrap_or_else(|_| Err(eyre!("generation task for '{}' panicked", group))),
                    Err(e) => Err(Report::new(e).wrap_err("failed to spawn generation task")),
                };
                (group, path, result)
            })
            .collect()
    });

    let mut report = EmitReport::default();
    for (group, path, result) in outcomes {
        match result {
            Ok(()) => report.written.push(path),
            Err(error) => {
                warn!(group = %group, path = %path.display(), "group generation failed: {:#}", error);
                report.failures.push(EmitFailure { group, path, error });
            }
        }
    }
    report
}
