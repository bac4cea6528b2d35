//! GitHub token discovery

use crate::auth::AuthSource;
use crate::config::Settings;
use crate::error::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// A resolved GitHub token
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// The token itself
    pub token: String,
    /// Where it came from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve a token: explicit input, then environment, then `gh auth token`
pub async fn get_github_auth(settings: &Settings) -> Result<GitHubAuthConfig> {
    if let Some(auth) = configured_token(settings) {
        return Ok(auth);
    }

    if let Some(token) = gh_cli_token().await {
        debug!("using GitHub token from gh CLI");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(
        "no GitHub token: set the github_token input, GITHUB_TOKEN, or run 'gh auth login'"
            .to_string(),
    ))
}

/// Token given through settings, input first
fn configured_token(settings: &Settings) -> Option<GitHubAuthConfig> {
    if let Some(token) = &settings.github_token {
        debug!("using GitHub token from input");
        return Some(GitHubAuthConfig {
            token: token.clone(),
            source: AuthSource::Input,
        });
    }

    settings.env_token.as_ref().map(|token| {
        debug!("using GitHub token from environment");
        GitHubAuthConfig {
            token: token.clone(),
            source: AuthSource::EnvVar,
        }
    })
}

async fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }
    token_from_output(&output.stdout)
}

fn token_from_output(stdout: &[u8]) -> Option<String> {
    let token = String::from_utf8_lossy(stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}
