pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export clone-core types for convenience
pub use clone_core::{CloneProtocol, ListError, RepositoryLister};
