//! Core types for release-automerge

/// A pull request on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
}

/// Repository coordinates on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// API base URL (None for api.github.com)
    pub api_url: Option<String>,
}

/// Why a run ended without merging or opening a PR
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Current branch does not carry the release pattern
    WrongBranchType {
        /// Current branch
        branch: String,
        /// Configured release pattern
        release_type: String,
    },
    /// Develop branch missing from the remote branch set
    MissingDevelopBranch(String),
    /// An open PR for the same head/base pair already exists
    PullRequestAlreadyOpen(PullRequest),
    /// Head and base have no changed files between them
    NoContentDifference {
        /// Head branch
        from: String,
        /// Base branch
        to: String,
    },
    /// Base already contains head; the merges API had nothing to do
    AlreadyUpToDate {
        /// Head branch
        from: String,
        /// Base branch
        to: String,
    },
    /// Dry run stopped before merging
    DryRun {
        /// Head branch
        from: String,
        /// Resolved base branch
        to: String,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongBranchType {
                branch,
                release_type,
            } => write!(f, "The branch {branch} is not a {release_type} branch type"),
            Self::MissingDevelopBranch(develop) => write!(f, "Missing {develop} branch"),
            Self::PullRequestAlreadyOpen(pr) => write!(
                f,
                "There is already a pull request ({}) from {} to {}. You can view it here: {}",
                pr.number, pr.head_ref, pr.base_ref, pr.html_url
            ),
            Self::NoContentDifference { from, to } => {
                write!(f, "There is no content difference between {from} and {to}.")
            }
            Self::AlreadyUpToDate { from, to } => write!(f, "{to} already contains {from}"),
            Self::DryRun { from, to } => write!(f, "Dry run: would merge {from} into {to}"),
        }
    }
}

/// Terminal result of one orchestrator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Merge succeeded server-side
    Merged {
        /// Head branch
        from: String,
        /// Base branch
        to: String,
        /// SHA of the merge commit
        sha: String,
    },
    /// Merge conflicted and a PR was opened instead
    PullRequestCreated(PullRequest),
    /// Nothing to do
    Skipped(SkipReason),
}

impl SyncOutcome {
    /// Value exposed as the run result: commit hash, PR URL, or empty
    pub fn output(&self) -> &str {
        match self {
            Self::Merged { sha, .. } => sha,
            Self::PullRequestCreated(pr) => &pr.html_url,
            Self::Skipped(_) => "",
        }
    }
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merged { from, to, sha } => write!(f, "Merged {from} into {to}: commit {sha}"),
            Self::PullRequestCreated(pr) => write!(
                f,
                "Pull request ({}) successful! You can view it here: {}",
                pr.number, pr.html_url
            ),
            Self::Skipped(reason) => write!(f, "{reason}"),
        }
    }
}
