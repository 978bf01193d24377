//! Implementation of clone-core traits for GitHubClient

use clone_core::{RepositoryDescriptor, RepositoryLister, Result};

use crate::client::GitHubClient;
use crate::convert::select_repositories;

impl RepositoryLister for GitHubClient {
    fn list_repositories(&self) -> Result<Vec<RepositoryDescriptor>> {
        let repos = self.list_org_repos()?;
        Ok(select_repositories(
            repos,
            self.control_repo_name(),
            self.clone_protocol(),
        ))
    }
}
