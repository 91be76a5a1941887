//! Watch Use Case implementation

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use notify::event::{ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::entities::LogicalFile;
use crate::domain::ports::QueryService;
use crate::domain::value_objects::{FileKind, FileName};
use crate::error::{LyticsError, LyticsResult};
use crate::infrastructure::samples::{load_csv, load_json};

use super::debounce::PendingChanges;
use super::evaluator::Evaluator;
use super::event::{WatchEvent, WatchOptions};
use super::registry::FileRegistry;

/// Poll interval for the running flag while waiting on notifications
const POLL_MS: u64 = 50;

/// Watch Use Case
///
/// Owns the file registry and drives previews for the `lytics watch` command.
/// Every event is handled on the calling thread, one at a time.
pub struct WatchUseCase<S: QueryService> {
    options: WatchOptions,
    service: S,
    registry: FileRegistry,
}

impl<S: QueryService> WatchUseCase<S> {
    pub fn new(options: WatchOptions, service: S) -> Self {
        Self {
            options,
            service,
            registry: FileRegistry::new(),
        }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    /// Start watching (blocking)
    ///
    /// Scans the root silently, subscribes to notifications, then previews
    /// every file that is written, created or renamed into the root until
    /// `running` is cleared. A burst of notifications for one save is handled
    /// once. The subscription is released on every return path.
    pub fn start<F>(&mut self, running: Arc<AtomicBool>, on_event: F) -> LyticsResult<()>
    where
        F: Fn(WatchEvent),
    {
        if !self.options.root.is_dir() {
            return Err(LyticsError::DirectoryNotFound {
                path: self.options.root.clone(),
            });
        }

        let files = self.load_files(&on_event)?;

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;
        watcher.watch(&self.options.root, RecursiveMode::NonRecursive)?;
        on_event(WatchEvent::WatchStarted {
            root: self.options.root.display().to_string(),
            files,
        });

        let mut pending = PendingChanges::new();
        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(Duration::from_millis(POLL_MS)) {
                Ok(Ok(event)) => {
                    let paths = changed_paths(&event);
                    if paths.is_empty() {
                        tracing::trace!(kind = ?event.kind, "ignoring event");
                    }
                    for path in paths {
                        pending.add_change(path.clone());
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!("watch error: {}", e);
                    on_event(WatchEvent::Error {
                        message: format!("watch error: {}", e),
                    });
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    on_event(WatchEvent::Error {
                        message: LyticsError::WatchChannelClosed.to_string(),
                    });
                    return Err(LyticsError::WatchChannelClosed);
                }
            }

            if pending.is_ready() {
                for path in pending.take_changes() {
                    self.handle_change(&path, &on_event);
                }
            }
        }

        drop(watcher);
        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Silent cold scan of the root; returns the number of recognized files
    pub fn load_files(&mut self, on_event: &impl Fn(WatchEvent)) -> LyticsResult<usize> {
        let mut paths: Vec<_> = fs::read_dir(&self.options.root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut handled = 0;
        for path in paths {
            if self.handle_file(&path, false, on_event) {
                handled += 1;
            }
        }
        Ok(handled)
    }

    /// Route a notification path through [`handle_file`](Self::handle_file)
    ///
    /// Unrecognized and vanished files are skipped, and so are empty sample
    /// files: an editor creates them empty before the first write lands.
    pub fn handle_change(&mut self, path: &Path, on_event: &impl Fn(WatchEvent)) {
        let Some(file_name) = FileName::parse(path) else {
            return;
        };
        if file_name.kind == FileKind::Unrecognized {
            tracing::trace!(path = %path.display(), "ignoring unrecognized file");
            return;
        }

        let Some(local) = path.file_name().map(|n| self.options.root.join(n)) else {
            return;
        };
        if !local.is_file() {
            tracing::debug!(path = %local.display(), "file is gone, skipping");
            return;
        }
        if matches!(file_name.kind, FileKind::Json | FileKind::Csv) && is_empty_file(&local) {
            tracing::debug!(path = %local.display(), "empty sample file, skipping");
            return;
        }

        on_event(WatchEvent::FileChanged {
            path: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        });
        self.handle_file(path, true, on_event);
    }

    /// Update the LogicalFile named by `path` and optionally preview it
    ///
    /// Only the final component of `path` is used; the file is read from the
    /// watch root. Returns false for paths that are not `.lql`, `.json` or
    /// `.csv` files; those leave the registry untouched.
    pub fn handle_file(
        &mut self,
        path: &Path,
        show_output: bool,
        on_event: &impl Fn(WatchEvent),
    ) -> bool {
        let Some(file_name) = FileName::parse(path) else {
            return false;
        };
        let Some(local) = path.file_name().map(|n| self.options.root.join(n)) else {
            return false;
        };

        let Self {
            options,
            service,
            registry,
            ..
        } = self;

        match file_name.kind {
            FileKind::Lql => {
                let query = match fs::read_to_string(&local) {
                    Ok(query) => query,
                    Err(source) => {
                        report(
                            on_event,
                            LyticsError::ReadFile {
                                file: local.clone(),
                                source,
                            },
                        );
                        return true;
                    }
                };

                let file = registry.get_or_create(&file_name.name);
                file.set_query(query);
                if !verify_query(&*service, file, on_event) {
                    return true;
                }

                if !has_json_sample(&options.root, &file_name) && !file.recent_checked() {
                    find_recent(&*service, file, on_event);
                }
            }
            FileKind::Csv => match load_csv(&local, options.csv_rows) {
                Ok(samples) => registry
                    .get_or_create(&file_name.name)
                    .replace_samples(samples),
                Err(e) => {
                    report(on_event, e);
                    return true;
                }
            },
            FileKind::Json => match load_json(&local) {
                Ok(samples) => registry
                    .get_or_create(&file_name.name)
                    .replace_samples(samples),
                Err(e) => {
                    report(on_event, e);
                    return true;
                }
            },
            FileKind::Unrecognized => return false,
        }

        if show_output {
            let file = registry.get_or_create(&file_name.name);
            Evaluator::new(&*service, options.evaluate_limit).evaluate(file, on_event);
        }
        true
    }
}

/// Validate the query of `file`, adopting the stream it reads from
///
/// Returns false when the API rejects the query.
pub(crate) fn verify_query<S: QueryService>(
    service: &S,
    file: &mut LogicalFile,
    on_event: &impl Fn(WatchEvent),
) -> bool {
    if !file.has_query() {
        return true;
    }

    match service.validate_query(file.query()) {
        Ok(forms) => {
            let stream = forms
                .first()
                .map(|form| form.from.clone())
                .filter(|from| !from.is_empty());
            if let Some(stream) = &stream {
                file.set_stream(stream.as_str());
            }
            on_event(WatchEvent::QueryValidated {
                name: file.name().to_string(),
                stream,
            });
            true
        }
        Err(e) => {
            on_event(WatchEvent::QueryInvalid {
                name: file.name().to_string(),
                message: e.to_string(),
            });
            false
        }
    }
}

/// Adopt recent events of the matching remote stream as samples
///
/// Attempted at most once per LogicalFile, whatever the outcome.
pub(crate) fn find_recent<S: QueryService>(
    service: &S,
    file: &mut LogicalFile,
    on_event: &impl Fn(WatchEvent),
) {
    file.mark_recent_checked();

    let streams = match service.list_streams("") {
        Ok(streams) => streams,
        Err(e) => {
            tracing::warn!(name = file.name(), "could not load streams data: {}", e);
            return;
        }
    };

    let matched = streams
        .into_iter()
        .filter(|s| file.matches_stream(&s.name))
        .last();
    if let Some(stream) = matched {
        on_event(WatchEvent::RecentSamples {
            name: file.name().to_string(),
            stream: stream.name.clone(),
            count: stream.recent.len(),
        });
        file.replace_samples(stream.recent);
    }
}

/// Paths whose content may have changed
///
/// Writes, creates and the destination of a rename count. Removes, metadata
/// changes and the source side of a rename do not. A two-path rename lists
/// the destination last. Backends that cannot tell the sides apart report
/// `RenameMode::Any`; a source path is gone by the time it is handled.
pub(crate) fn changed_paths(event: &Event) -> &[PathBuf] {
    match event.kind {
        EventKind::Create(_)
        | EventKind::Modify(ModifyKind::Data(_))
        | EventKind::Modify(ModifyKind::Any)
        | EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Any)) => &event.paths,
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => event
            .paths
            .last()
            .map(std::slice::from_ref)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// Whether the root holds a `.json` sample for `file_name`, in any case
pub(crate) fn has_json_sample(root: &Path, file_name: &FileName) -> bool {
    let Ok(entries) = fs::read_dir(root) else {
        return false;
    };
    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| FileName::parse(&entry.path()))
        .any(|other| file_name.is_sibling(&other, FileKind::Json))
}

fn is_empty_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() == 0).unwrap_or(false)
}

fn report(on_event: &impl Fn(WatchEvent), err: LyticsError) {
    tracing::error!("{}", err);
    on_event(WatchEvent::Error {
        message: err.to_string(),
    });
}
