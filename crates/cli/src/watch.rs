//! Re-run a computation whenever a report file changes on disk.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{EventKind, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use civic_core::{GeoReport, JsonFileSource, ReportSource};

/// Editors often write a file in several steps; wait this long after the
/// last event before reloading.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Run `on_change` once with the current reports, then again after every
/// modification of the source file. Blocks until the watcher shuts down.
///
/// A file that fails to parse mid-edit is logged and skipped; the next
/// successful write triggers a fresh run.
pub fn watch_reports<F>(source: &JsonFileSource, mut on_change: F) -> Result<()>
where
    F: FnMut(&[GeoReport]) -> Result<()>,
{
    let path = source.path();
    let reports = source
        .fetch_reports()
        .with_context(|| format!("failed to read reports from {}", path.display()))?;
    on_change(&reports)?;

    // Watch the parent directory so atomic renames over the file are seen.
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .context("report path has no file name")?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(
        move |res: std::result::Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                let relevant = matches!(
                    event.kind,
                    EventKind::Create(_)
                        | EventKind::Modify(notify::event::ModifyKind::Data(_))
                        | EventKind::Modify(notify::event::ModifyKind::Name(_))
                        | EventKind::Modify(notify::event::ModifyKind::Any)
                );
                let ours = event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()));
                if relevant && ours {
                    let _ = tx.send(());
                }
            }
            Err(e) => warn!(error = %e, "report watcher error"),
        },
    )
    .context("failed to create file watcher")?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", dir.display()))?;
    info!(path = %path.display(), "watching report file for changes");

    while rx.recv().is_ok() {
        // Coalesce bursts of events into one reload.
        while rx.recv_timeout(DEBOUNCE).is_ok() {}

        match source.fetch_reports() {
            Ok(reports) => {
                debug!(count = reports.len(), "report file changed");
                on_change(&reports)?;
            }
            Err(e) => warn!(error = %e, path = %path.display(), "skipping unreadable report file"),
        }
    }

    Ok(())
}
