use thiserror::Error;

/// Errors raised while listing an organization's repositories
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Organization not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Errors raised by a single clone invocation
#[derive(Error, Debug)]
pub enum CloneError {
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clone of {url} failed ({status})")]
    Failed { url: String, status: String },
}

pub type Result<T> = std::result::Result<T, ListError>;
