//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::{PlatformService, pr_body, pr_title};
use crate::types::{PullRequest, RepoConfig};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub service using octocrab
///
/// Pull requests go through octocrab. The merges and compare endpoints are
/// called directly so the `204`/`409` statuses can be told apart.
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
    /// Token for raw HTTP requests
    token: String,
    /// HTTP client for raw requests
    http_client: Client,
    /// API base without trailing slash
    api_base: String,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: RepoConfig) -> Result<Self> {
        let api_url = config.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let parsed = Url::parse(api_url)
            .map_err(|e| Error::Config(format!("invalid API URL '{api_url}': {e}")))?;
        let api_base = parsed.as_str().trim_end_matches('/').to_string();

        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if config.api_url.is_some() {
            builder = builder
                .base_uri(api_base.as_str())
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }
        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent(concat!("release-automerge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            token: token.to_string(),
            http_client,
            api_base,
        })
    }

    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{tail}",
            self.api_base, self.config.owner, self.config.repo
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }
}

/// Error body returned by the REST API
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

async fn api_error(context: &str, response: reqwest::Response) -> Error {
    let status = response.status();
    let message = response
        .json::<ApiMessage>()
        .await
        .map_or_else(|_| String::from("no message"), |m| m.message);
    Error::GitHubApi(format!("{context} ({status}): {message}"))
}

/// Helper to convert octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        base_ref: pr.base.ref_field.clone(),
        head_ref: pr.head.ref_field.clone(),
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn merge_branches(&self, from: &str, to: &str) -> Result<Option<String>> {
        #[derive(Deserialize)]
        struct MergeCommit {
            sha: String,
        }

        debug!(from, to, "merging branches");
        let response = self
            .authorized(self.http_client.post(self.repo_url("merges")))
            .json(&serde_json::json!({ "base": to, "head": from }))
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to request merge: {e}")))?;

        match response.status() {
            StatusCode::CREATED => {
                let commit: MergeCommit = response
                    .json()
                    .await
                    .map_err(|e| Error::GitHubApi(format!("Failed to parse merge commit: {e}")))?;
                debug!(sha = %commit.sha, "merged");
                Ok(Some(commit.sha))
            }
            StatusCode::NO_CONTENT => {
                debug!("nothing to merge");
                Ok(None)
            }
            StatusCode::CONFLICT => Err(Error::GitHubApi("Merge conflict".to_string())),
            _ => Err(api_error("Merge failed", response).await),
        }
    }

    async fn find_open_pr(&self, from: &str, to: &str) -> Result<Option<PullRequest>> {
        debug!(from, to, "finding open PR");
        let prs = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(octocrab::params::State::Open)
            .head(format!("{}:{from}", self.config.owner))
            .base(to)
            .per_page(100)
            .send()
            .await?;

        let result = prs
            .items
            .iter()
            .find(|pr| pr.head.ref_field == from && pr.base.ref_field == to)
            .map(pr_from_octocrab);
        if let Some(ref pr) = result {
            debug!(pr_number = pr.number, "found open PR");
        } else {
            debug!("no open PR found");
        }
        Ok(result)
    }

    async fn has_content_difference(&self, from: &str, to: &str) -> Result<bool> {
        #[derive(Deserialize)]
        struct Comparison {
            #[serde(default)]
            files: Option<Vec<serde_json::Value>>,
        }

        debug!(from, to, "comparing branches");
        let basehead = format!(
            "{}...{}",
            urlencoding::encode(to),
            urlencoding::encode(from)
        );
        let response = self
            .authorized(
                self.http_client
                    .get(self.repo_url(&format!("compare/{basehead}")))
                    .query(&[("page", "1"), ("per_page", "1")]),
            )
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to compare branches: {e}")))?;

        if !response.status().is_success() {
            return Err(api_error("Compare failed", response).await);
        }

        let comparison: Comparison = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse comparison: {e}")))?;

        let changed = comparison.files.is_some_and(|files| !files.is_empty());
        debug!(changed, "compared branches");
        Ok(changed)
    }

    async fn create_pr(&self, from: &str, to: &str) -> Result<PullRequest> {
        debug!(from, to, "creating PR");
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .create(pr_title(from, to), from, to)
            .body(pr_body(from, to))
            .draft(false)
            .send()
            .await?;

        let result = pr_from_octocrab(&pr);
        debug!(pr_number = result.number, "created PR");
        Ok(result)
    }
}
