//! Idempotent "clone if missing" pass over a repository listing

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::CloneError;
use crate::models::RepositoryDescriptor;
use crate::traits::CloneTool;

/// Settings for one synchronization run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Print the clone commands instead of running them
    pub dry_run: bool,
    /// Directory the clones live in
    pub root: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            root: PathBuf::from("."),
        }
    }
}

/// Which of a repository's two clones an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneTarget {
    Main,
    Wiki,
}

/// Progress notifications emitted while synchronizing
#[derive(Debug)]
pub enum SyncEvent {
    /// The destination folder already exists
    Skipped { folder: String, target: CloneTarget },
    /// A clone is about to start (or would start, in dry-run mode)
    Cloning { name: String, target: CloneTarget },
    /// Dry-run stand-in for the clone
    DryRun { command: Vec<String> },
    /// The clone tool reported a failure; the run carries on
    Failed {
        name: String,
        target: CloneTarget,
        error: CloneError,
    },
}

/// Totals for a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub cloned: usize,
    pub skipped: usize,
    pub planned: usize,
    pub failed: usize,
}

/// Clone executor: clones every repository, then its wiki, unless the
/// destination folder is already there.
pub struct Synchronizer<'a, T: CloneTool + ?Sized> {
    tool: &'a T,
    config: SyncConfig,
}

impl<'a, T: CloneTool + ?Sized> Synchronizer<'a, T> {
    pub fn new(tool: &'a T, config: SyncConfig) -> Self {
        Self { tool, config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Process `repos` in order, reporting progress through `on_event`.
    ///
    /// Clone failures are reported and counted but never stop the run.
    pub fn run<F>(&self, repos: &[RepositoryDescriptor], mut on_event: F) -> SyncReport
    where
        F: FnMut(&SyncEvent),
    {
        let mut report = SyncReport::default();

        for repo in repos {
            self.sync_one(
                repo.name(),
                repo.folder(),
                repo.clone_url(),
                CloneTarget::Main,
                &mut report,
                &mut on_event,
            );

            if let (Some(folder), Some(url)) = (repo.wiki_folder(), repo.wiki_clone_url()) {
                self.sync_one(
                    repo.name(),
                    &folder,
                    url,
                    CloneTarget::Wiki,
                    &mut report,
                    &mut on_event,
                );
            }
        }

        report
    }

    fn sync_one<F>(
        &self,
        name: &str,
        folder: &str,
        url: &str,
        target: CloneTarget,
        report: &mut SyncReport,
        on_event: &mut F,
    ) where
        F: FnMut(&SyncEvent),
    {
        let dest = self.config.root.join(folder);
        if entry_exists(&dest) {
            debug!("{} exists, not cloning {}", dest.display(), url);
            report.skipped += 1;
            on_event(&SyncEvent::Skipped {
                folder: folder.to_string(),
                target,
            });
            return;
        }

        on_event(&SyncEvent::Cloning {
            name: name.to_string(),
            target,
        });

        if self.config.dry_run {
            report.planned += 1;
            on_event(&SyncEvent::DryRun {
                command: self.tool.command_line(url),
            });
            return;
        }

        match self.tool.clone_repo(url, &self.config.root) {
            Ok(()) => report.cloned += 1,
            Err(error) => {
                report.failed += 1;
                on_event(&SyncEvent::Failed {
                    name: name.to_string(),
                    target,
                    error,
                });
            }
        }
    }
}

/// Any entry counts, including files and dangling symlinks; the entry is
/// not checked to be a clone of the expected remote.
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
