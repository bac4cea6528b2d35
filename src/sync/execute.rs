//! Sync execution - effectful operations
//!
//! Takes the collaborators and walks the single-pass state machine:
//! check branch type, fetch, list, resolve, merge, and on merge failure
//! fall back to opening a PR.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::repo::GitRepository;
use crate::sync::resolve::{DEFAULT_REMOTE, SortOptions, resolve_successor_with};
use crate::types::{SkipReason, SyncOutcome};
use tracing::{info, warn};

/// Options for one sync run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Substring marking a branch as release-eligible
    pub release_branch_type: String,
    /// Fallback target when no successor release exists
    pub develop_branch: String,
    /// Remote whose qualifier is stripped from targets
    pub remote: String,
    /// Version ordering options
    pub sort: SortOptions,
    /// Resolve the target but stop before merging
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            release_branch_type: "release".to_string(),
            develop_branch: "develop".to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            sort: SortOptions::default(),
            dry_run: false,
        }
    }
}

fn skip(reason: SkipReason) -> SyncOutcome {
    info!("{reason}");
    SyncOutcome::Skipped(reason)
}

/// Run one sync pass for the checked-out branch (EFFECTFUL)
///
/// Orchestration conditions (wrong branch type, missing develop branch,
/// open PR, no content difference) come back as
/// [`SyncOutcome::Skipped`]. A failed merge is the only collaborator error
/// handled here; any other error is returned to the caller.
pub async fn run_sync(
    repo: &dyn GitRepository,
    platform: &dyn PlatformService,
    options: &SyncOptions,
) -> Result<SyncOutcome> {
    let current = repo.current_branch().await?;

    if !current.contains(&options.release_branch_type) {
        return Ok(skip(SkipReason::WrongBranchType {
            branch: current,
            release_type: options.release_branch_type.clone(),
        }));
    }

    repo.fetch_remote().await?;

    let branches = repo
        .list_remote_branches(&options.release_branch_type)
        .await;

    if !branches.iter().any(|b| b.contains(&options.develop_branch)) {
        return Ok(skip(SkipReason::MissingDevelopBranch(
            options.develop_branch.clone(),
        )));
    }

    let target = resolve_successor_with(
        &branches,
        &current,
        &options.develop_branch,
        &options.remote,
        options.sort,
    );

    if options.dry_run {
        return Ok(skip(SkipReason::DryRun {
            from: current,
            to: target,
        }));
    }

    info!("Merge branch:{current} to: {target}");
    let merge_error = match platform.merge_branches(&current, &target).await {
        Ok(Some(sha)) => {
            info!("Commit {sha}");
            return Ok(SyncOutcome::Merged {
                from: current,
                to: target,
                sha,
            });
        }
        Ok(None) => {
            return Ok(skip(SkipReason::AlreadyUpToDate {
                from: current,
                to: target,
            }));
        }
        Err(e) => e,
    };
    warn!("Merge branch:{current} to: {target} failed:{merge_error}");

    if let Some(pr) = platform.find_open_pr(&current, &target).await? {
        return Ok(skip(SkipReason::PullRequestAlreadyOpen(pr)));
    }

    if !platform.has_content_difference(&current, &target).await? {
        return Ok(skip(SkipReason::NoContentDifference {
            from: current,
            to: target,
        }));
    }

    let pr = platform.create_pr(&current, &target).await?;
    let outcome = SyncOutcome::PullRequestCreated(pr);
    info!("{outcome}");
    Ok(outcome)
}
