//! Mock git repository for testing

#![allow(dead_code)]

use async_trait::async_trait;
use release_automerge::error::{Error, Result};
use release_automerge::repo::GitRepository;
use std::sync::Mutex;

/// In-memory [`GitRepository`]
///
/// `list_remote_branches` returns the configured branches as given unless
/// [`MockGitRepository::with_pattern_filter`] turns on substring filtering
/// like `GitCli` does.
pub struct MockGitRepository {
    current_branch: Option<String>,
    remote_branches: Vec<String>,
    fetch_error: Option<String>,
    filter_by_pattern: bool,
    fetch_calls: Mutex<usize>,
    list_calls: Mutex<Vec<String>>,
}

impl MockGitRepository {
    /// Repository on `current` with the given remote branches
    pub fn new(current: &str, remote_branches: &[&str]) -> Self {
        Self {
            current_branch: Some(current.to_string()),
            remote_branches: remote_branches.iter().map(ToString::to_string).collect(),
            fetch_error: None,
            filter_by_pattern: false,
            fetch_calls: Mutex::new(0),
            list_calls: Mutex::new(Vec::new()),
        }
    }

    /// Repository with a detached HEAD
    pub fn detached(remote_branches: &[&str]) -> Self {
        Self {
            current_branch: None,
            ..Self::new("", remote_branches)
        }
    }

    /// Make `fetch_remote` fail
    pub fn with_fetch_error(mut self, msg: &str) -> Self {
        self.fetch_error = Some(msg.to_string());
        self
    }

    /// Filter listed branches by the requested pattern
    pub fn with_pattern_filter(mut self) -> Self {
        self.filter_by_pattern = true;
        self
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }

    /// Patterns `list_remote_branches` was called with
    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitRepository for MockGitRepository {
    async fn fetch_remote(&self) -> Result<()> {
        *self.fetch_calls.lock().unwrap() += 1;
        match &self.fetch_error {
            Some(msg) => Err(Error::Git(msg.clone())),
            None => Ok(()),
        }
    }

    async fn current_branch(&self) -> Result<String> {
        self.current_branch.clone().ok_or(Error::NoCurrentBranch)
    }

    async fn list_remote_branches(&self, pattern: &str) -> Vec<String> {
        self.list_calls.lock().unwrap().push(pattern.to_string());
        self.remote_branches
            .iter()
            .filter(|b| !self.filter_by_pattern || b.contains(pattern))
            .cloned()
            .collect()
    }
}
