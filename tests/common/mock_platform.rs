//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use release_automerge::error::{Error, Result};
use release_automerge::platform::PlatformService;
use release_automerge::types::{PullRequest, RepoConfig};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for branch-pair operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPairCall {
    pub from: String,
    pub to: String,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Auto-incrementing PR numbers
/// - Call tracking for verification
/// - Configurable responses
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: RepoConfig,
    next_pr_number: AtomicU64,
    // Responses
    merge_response: Mutex<Option<String>>,
    open_pr: Mutex<Option<PullRequest>>,
    content_difference: Mutex<bool>,
    // Call tracking
    merge_calls: Mutex<Vec<BranchPairCall>>,
    find_pr_calls: Mutex<Vec<BranchPairCall>>,
    compare_calls: Mutex<Vec<BranchPairCall>>,
    create_pr_calls: Mutex<Vec<BranchPairCall>>,
    // Error injection
    error_on_merge: Mutex<Option<String>>,
    error_on_find_pr: Mutex<Option<String>>,
    error_on_compare: Mutex<Option<String>>,
    error_on_create_pr: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    ///
    /// Merges succeed with `merged_sha` until told otherwise.
    pub fn with_config(config: RepoConfig) -> Self {
        Self {
            config,
            next_pr_number: AtomicU64::new(1),
            merge_response: Mutex::new(Some("merged_sha".to_string())),
            open_pr: Mutex::new(None),
            content_difference: Mutex::new(true),
            merge_calls: Mutex::new(Vec::new()),
            find_pr_calls: Mutex::new(Vec::new()),
            compare_calls: Mutex::new(Vec::new()),
            create_pr_calls: Mutex::new(Vec::new()),
            error_on_merge: Mutex::new(None),
            error_on_find_pr: Mutex::new(None),
            error_on_compare: Mutex::new(None),
            error_on_create_pr: Mutex::new(None),
        }
    }

    // === Response setup ===

    /// SHA returned by a successful merge; `None` means already up to date
    pub fn set_merge_response(&self, sha: Option<&str>) {
        *self.merge_response.lock().unwrap() = sha.map(String::from);
    }

    /// PR returned by `find_open_pr`
    pub fn set_open_pr(&self, pr: Option<PullRequest>) {
        *self.open_pr.lock().unwrap() = pr;
    }

    /// Result of `has_content_difference`
    pub fn set_content_difference(&self, differs: bool) {
        *self.content_difference.lock().unwrap() = differs;
    }

    // === Error injection methods ===

    /// Make `merge_branches` fail (e.g. a conflict)
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `find_open_pr` return an error
    pub fn fail_find_pr(&self, msg: &str) {
        *self.error_on_find_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `has_content_difference` return an error
    pub fn fail_compare(&self, msg: &str) {
        *self.error_on_compare.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pr` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    pub fn get_merge_calls(&self) -> Vec<BranchPairCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    pub fn get_find_pr_calls(&self) -> Vec<BranchPairCall> {
        self.find_pr_calls.lock().unwrap().clone()
    }

    pub fn get_compare_calls(&self) -> Vec<BranchPairCall> {
        self.compare_calls.lock().unwrap().clone()
    }

    pub fn get_create_pr_calls(&self) -> Vec<BranchPairCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Assert that `merge_branches` was called with specific head and base
    pub fn assert_merge_called(&self, from: &str, to: &str) {
        let calls = self.get_merge_calls();
        assert!(
            calls.iter().any(|c| c.from == from && c.to == to),
            "Expected merge_branches({from}, {to}) but got: {calls:?}"
        );
    }

    /// Assert that `create_pr` was called with specific head and base
    pub fn assert_create_pr_called(&self, from: &str, to: &str) {
        let calls = self.get_create_pr_calls();
        assert!(
            calls.iter().any(|c| c.from == from && c.to == to),
            "Expected create_pr({from}, {to}) but got: {calls:?}"
        );
    }

    /// Assert that no PR-related call happened
    pub fn assert_no_pr_queries(&self) {
        assert!(self.get_find_pr_calls().is_empty(), "find_open_pr was called");
        assert!(self.get_compare_calls().is_empty(), "has_content_difference was called");
        assert!(self.get_create_pr_calls().is_empty(), "create_pr was called");
    }
}

fn record(calls: &Mutex<Vec<BranchPairCall>>, from: &str, to: &str) {
    calls.lock().unwrap().push(BranchPairCall {
        from: from.to_string(),
        to: to.to_string(),
    });
}

fn injected(error: &Mutex<Option<String>>) -> Result<()> {
    match error.lock().unwrap().as_ref() {
        Some(msg) => Err(Error::GitHubApi(msg.clone())),
        None => Ok(()),
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn merge_branches(&self, from: &str, to: &str) -> Result<Option<String>> {
        record(&self.merge_calls, from, to);
        injected(&self.error_on_merge)?;
        Ok(self.merge_response.lock().unwrap().clone())
    }

    async fn find_open_pr(&self, from: &str, to: &str) -> Result<Option<PullRequest>> {
        record(&self.find_pr_calls, from, to);
        injected(&self.error_on_find_pr)?;
        Ok(self.open_pr.lock().unwrap().clone())
    }

    async fn has_content_difference(&self, from: &str, to: &str) -> Result<bool> {
        record(&self.compare_calls, from, to);
        injected(&self.error_on_compare)?;
        Ok(*self.content_difference.lock().unwrap())
    }

    async fn create_pr(&self, from: &str, to: &str) -> Result<PullRequest> {
        record(&self.create_pr_calls, from, to);
        injected(&self.error_on_create_pr)?;
        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!(
                "https://github.com/{}/{}/pull/{number}",
                self.config.owner, self.config.repo
            ),
            base_ref: to.to_string(),
            head_ref: from.to_string(),
        })
    }
}
