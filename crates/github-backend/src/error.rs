use clone_core::ListError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Organization not found: {0}")]
    OrgNotFound(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for ListError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => ListError::Transport(e.to_string()),
            GitHubError::Parse(e) => ListError::Protocol(e.to_string()),
            GitHubError::OrgNotFound(org) => ListError::NotFound(org),
            GitHubError::Unauthorized => ListError::Unauthorized,
            GitHubError::RateLimited => ListError::Api {
                status: 429,
                message: "GitHub API rate limit exceeded".to_string(),
            },
            GitHubError::Api { status, message } => ListError::Api { status, message },
        }
    }
}
