//! Model conversions from GitHub types to clone-core types

use clone_core::{CloneProtocol, RepositoryDescriptor};

use crate::models::GitHubRepo;

/// Whether a listed repository should be cloned at all
pub fn is_clonable(repo: &GitHubRepo, control_repo: &str) -> bool {
    !repo.archived && repo.name != control_repo
}

/// Convert a GitHub repository record to a clone-core descriptor
pub fn github_repo_to_descriptor(repo: GitHubRepo, protocol: CloneProtocol) -> RepositoryDescriptor {
    let url = match protocol {
        CloneProtocol::Ssh => repo.ssh_url,
        CloneProtocol::Https => repo.clone_url,
    };
    RepositoryDescriptor::new(repo.name, url, repo.has_wiki)
}

/// Drop archived and control repositories, keeping the listing order
pub fn select_repositories(
    repos: Vec<GitHubRepo>,
    control_repo: &str,
    protocol: CloneProtocol,
) -> Vec<RepositoryDescriptor> {
    repos
        .into_iter()
        .filter(|r| is_clonable(r, control_repo))
        .map(|r| github_repo_to_descriptor(r, protocol))
        .collect()
}
