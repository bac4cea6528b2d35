//! Run configuration
//!
//! Every setting is collected once at startup into [`Settings`] and passed
//! down. Values come from flags or environment (already read by the CLI
//! into [`SettingsInput`]), then an optional TOML file, then defaults.

use crate::error::{Error, Result};
use crate::platform::parse_repository;
use crate::sync::{DEFAULT_REMOTE, SortOptions, SyncOptions};
use crate::types::RepoConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file, relative to the workspace
pub const DEFAULT_CONFIG_FILE: &str = ".github/automerge.toml";

const DEFAULT_RELEASE_BRANCH_TYPE: &str = "release";
const DEFAULT_DEVELOP_BRANCH: &str = "develop";

/// Optional settings file
///
/// ```toml
/// release_branch_type = "release"
/// develop_branch = "develop"
/// remote = "origin"
/// include_prereleases = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Substring marking release branches
    pub release_branch_type: Option<String>,
    /// Fallback target branch
    pub develop_branch: Option<String>,
    /// Remote name stripped from targets
    pub remote: Option<String>,
    /// Whether pre-release branches take part in ordering
    pub include_prereleases: Option<bool>,
    /// REST API base URL
    pub api_url: Option<String>,
}

/// Raw values as given on the command line or in the environment
///
/// Empty strings count as unset, since GitHub Actions passes inputs that
/// were not provided as empty variables.
#[derive(Debug, Clone, Default)]
pub struct SettingsInput {
    /// Checked-out workspace (`GITHUB_WORKSPACE`)
    pub workspace: Option<PathBuf>,
    /// `owner/repo` (`GITHUB_REPOSITORY`)
    pub repository: Option<String>,
    /// Release branch substring
    pub release_branch_type: Option<String>,
    /// Fallback target branch
    pub develop_branch: Option<String>,
    /// Explicit token input
    pub github_token: Option<String>,
    /// Token from `GITHUB_TOKEN`/`GH_TOKEN`
    pub env_token: Option<String>,
    /// Remote name
    pub remote: Option<String>,
    /// Drop pre-release branches from ordering
    pub exclude_prereleases: bool,
    /// REST API base URL
    pub api_url: Option<String>,
    /// Explicit config file
    pub config_file: Option<PathBuf>,
    /// Resolve only, never merge
    pub dry_run: bool,
}

/// Fully resolved run configuration
#[derive(Clone)]
pub struct Settings {
    /// Absolute workspace path
    pub workspace: PathBuf,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Release branch substring
    pub release_branch_type: String,
    /// Fallback target branch
    pub develop_branch: String,
    /// Remote name
    pub remote: String,
    /// Whether pre-release branches take part in ordering
    pub include_prereleases: bool,
    /// REST API base URL, if not the public one
    pub api_url: Option<String>,
    /// Explicit token input
    pub github_token: Option<String>,
    /// Token from the environment
    pub env_token: Option<String>,
    /// Resolve only, never merge
    pub dry_run: bool,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("workspace", &self.workspace)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("release_branch_type", &self.release_branch_type)
            .field("develop_branch", &self.develop_branch)
            .field("remote", &self.remote)
            .field("include_prereleases", &self.include_prereleases)
            .field("api_url", &self.api_url)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load a settings file
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}

impl Settings {
    /// Resolve settings from raw input
    ///
    /// Fails when the workspace or repository is missing, or when an
    /// explicitly named config file cannot be loaded.
    pub fn resolve(input: SettingsInput) -> Result<Self> {
        let workspace = input
            .workspace
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::Config("GITHUB_WORKSPACE not defined".to_string()))?;
        let workspace = std::path::absolute(&workspace)?;

        let repository = non_empty(input.repository)
            .ok_or_else(|| Error::Config("GITHUB_REPOSITORY not defined".to_string()))?;
        let (owner, repo) = parse_repository(&repository)?;

        let file = match input.config_file {
            Some(path) => load_file_config(&path)?,
            None => {
                let default_path = workspace.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    load_file_config(&default_path)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let include_prereleases =
            !input.exclude_prereleases && file.include_prereleases.unwrap_or(true);

        Ok(Self {
            workspace,
            owner,
            repo,
            release_branch_type: non_empty(input.release_branch_type)
                .or_else(|| non_empty(file.release_branch_type))
                .unwrap_or_else(|| DEFAULT_RELEASE_BRANCH_TYPE.to_string()),
            develop_branch: non_empty(input.develop_branch)
                .or_else(|| non_empty(file.develop_branch))
                .unwrap_or_else(|| DEFAULT_DEVELOP_BRANCH.to_string()),
            remote: non_empty(input.remote)
                .or_else(|| non_empty(file.remote))
                .unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            include_prereleases,
            api_url: non_empty(input.api_url).or_else(|| non_empty(file.api_url)),
            github_token: non_empty(input.github_token),
            env_token: non_empty(input.env_token),
            dry_run: input.dry_run,
        })
    }

    /// Orchestrator options derived from these settings
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            release_branch_type: self.release_branch_type.clone(),
            develop_branch: self.develop_branch.clone(),
            remote: self.remote.clone(),
            sort: SortOptions {
                include_prereleases: self.include_prereleases,
            },
            dry_run: self.dry_run,
        }
    }

    /// Platform coordinates derived from these settings
    pub fn repo_config(&self) -> RepoConfig {
        RepoConfig {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            api_url: self.api_url.clone(),
        }
    }
}
