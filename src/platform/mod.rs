//! Hosting platform services
//!
//! The orchestrator talks to the hosting platform through
//! [`PlatformService`]; [`GitHubService`] is the production implementation.

mod github;

pub use github::{DEFAULT_API_URL, GitHubService};

use crate::error::{Error, Result};
use crate::types::PullRequest;
use async_trait::async_trait;

/// Platform operations used by the orchestrator
///
/// Credentials and repository coordinates belong to the implementation,
/// so every call only names the two branches involved.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Merge `from` into `to` on the server
    ///
    /// Returns `Some(sha)` of the new merge commit, or `None` when `to`
    /// already contains `from`. Fails on conflicts.
    async fn merge_branches(&self, from: &str, to: &str) -> Result<Option<String>>;

    /// Find an open PR with head `from` and base `to`
    async fn find_open_pr(&self, from: &str, to: &str) -> Result<Option<PullRequest>>;

    /// Whether comparing `from` against `to` yields at least one changed file
    async fn has_content_difference(&self, from: &str, to: &str) -> Result<bool>;

    /// Open a PR from `from` into `to` using [`pr_title`] and [`pr_body`]
    async fn create_pr(&self, from: &str, to: &str) -> Result<PullRequest>;
}

/// Title for sync PRs
pub fn pr_title(from: &str, to: &str) -> String {
    format!("sync: {from} to {to}")
}

/// Body for sync PRs
pub fn pr_body(from: &str, to: &str) -> String {
    format!("sync-branches: New code has just landed in {from}, so let's bring {to} up to speed!")
}

/// Split an `owner/repo` identifier
pub fn parse_repository(identifier: &str) -> Result<(String, String)> {
    let identifier = identifier.trim();
    let (owner, repo) = identifier
        .split_once('/')
        .ok_or_else(|| Error::InvalidRepository(identifier.to_string()))?;

    let repo = repo.trim_end_matches(".git");
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(Error::InvalidRepository(identifier.to_string()));
    }
    Ok((owner.to_string(), repo.to_string()))
}
