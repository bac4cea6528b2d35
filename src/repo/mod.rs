//! Local git repository access
//!
//! The orchestrator only needs three things from the working copy: refresh
//! remote refs, name the checked-out branch, and list remote branches.

mod git;

pub use git::GitCli;

use crate::error::Result;
use async_trait::async_trait;

/// Git operations used by the orchestrator
#[async_trait]
pub trait GitRepository: Send + Sync {
    /// Refresh remote-tracking refs from every remote
    ///
    /// Failure is fatal to the run.
    async fn fetch_remote(&self) -> Result<()>;

    /// Short name of the checked-out branch
    ///
    /// Returns [`crate::error::Error::NoCurrentBranch`] on a detached HEAD.
    async fn current_branch(&self) -> Result<String>;

    /// Remote-tracking branch names (e.g. `origin/release/1.0.0`) that
    /// contain `pattern`
    ///
    /// Returns an empty list if the branches cannot be listed.
    async fn list_remote_branches(&self, pattern: &str) -> Vec<String>;
}
