//! Error types for release-automerge

use thiserror::Error;

/// Errors that end a run
///
/// Orchestration outcomes such as "wrong branch type" or "PR already open"
/// are not errors; they are reported through [`crate::types::SyncOutcome`].
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration
    #[error("{0}")]
    Config(String),

    /// A git command failed
    #[error("git error: {0}")]
    Git(String),

    /// The current branch could not be determined (detached HEAD, no repo)
    #[error("Current branch cannot be determined")]
    NoCurrentBranch,

    /// Repository identifier is not `owner/repo`
    #[error("invalid repository identifier '{0}', expected owner/repo")]
    InvalidRepository(String),

    /// GitHub API failure
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// No usable token
    #[error("authentication error: {0}")]
    Auth(String),

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
