//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;
mod mock_repo;

pub use mock_platform::{BranchPairCall, MockPlatformService};
pub use mock_repo::MockGitRepository;

use release_automerge::sync::SyncOptions;
use release_automerge::types::{PullRequest, RepoConfig};
use std::path::Path;
use std::process::Command;

/// Config for the test repository
pub fn github_config() -> RepoConfig {
    RepoConfig {
        owner: "owner".to_string(),
        repo: "repo".to_string(),
        api_url: None,
    }
}

/// Mock platform pointed at `owner/repo`
pub fn mock_platform() -> MockPlatformService {
    MockPlatformService::with_config(github_config())
}

/// Default options: `release` pattern, `develop` fallback
pub fn sync_options() -> SyncOptions {
    SyncOptions::default()
}

/// An open PR between two branches
pub fn make_pr(number: u64, head: &str, base: &str) -> PullRequest {
    PullRequest {
        number,
        html_url: format!("https://github.com/owner/repo/pull/{number}"),
        base_ref: base.to_string(),
        head_ref: head.to_string(),
    }
}

/// Whether a `git` executable is available
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Run git in `dir`, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
