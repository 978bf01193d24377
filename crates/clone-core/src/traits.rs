use std::path::Path;

use crate::error::{CloneError, Result};
use crate::models::RepositoryDescriptor;

/// Source of the repositories to clone
///
/// Implementations issue a single listing request and return the
/// repositories in the order the forge reported them, with archived and
/// reserved repositories already removed.
pub trait RepositoryLister {
    fn list_repositories(&self) -> Result<Vec<RepositoryDescriptor>>;
}

/// Something able to clone a repository from a URL
pub trait CloneTool {
    /// The exact command line a clone of `url` runs
    fn command_line(&self, url: &str) -> Vec<String>;

    /// Clone `url` inside `parent`, letting the tool pick the folder name
    fn clone_repo(&self, url: &str, parent: &Path) -> std::result::Result<(), CloneError>;
}
