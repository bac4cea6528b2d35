//! Shared command context
//!
//! Turns raw input into settings and builds the production collaborators.

use release_automerge::auth::get_github_auth;
use release_automerge::config::{Settings, SettingsInput};
use release_automerge::error::Result;
use release_automerge::platform::{GitHubService, PlatformService};
use release_automerge::repo::GitCli;
use tracing::{debug, info};

/// Everything a sync run needs
///
/// Settings are resolved once here; the collaborators receive what they
/// need from them and nothing reads the environment afterwards.
pub struct CommandContext {
    /// Resolved settings
    pub settings: Settings,
    /// Git access to the workspace
    pub repo: GitCli,
    /// GitHub access
    pub platform: Box<dyn PlatformService>,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// - Resolve settings (fails without workspace or repository)
    /// - Find a GitHub token
    /// - Create the git runner and the platform service
    pub async fn new(input: SettingsInput) -> Result<Self> {
        let settings = Settings::resolve(input)?;
        info!("GITHUB_WORKSPACE: {}", settings.workspace.display());
        info!("owner: {} repository: {}", settings.owner, settings.repo);
        debug!(?settings, "resolved settings");

        let auth = get_github_auth(&settings).await?;
        debug!(source = %auth.source, "resolved GitHub token");

        let repo = GitCli::new(&settings.workspace);
        let platform: Box<dyn PlatformService> =
            Box::new(GitHubService::new(&auth.token, settings.repo_config())?);

        Ok(Self {
            settings,
            repo,
            platform,
        })
    }
}
