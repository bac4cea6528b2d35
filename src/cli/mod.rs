//! Command-line interface

mod context;
mod output;
mod resolve;
mod style;
mod sync;

use clap::{Args, Parser, Subcommand};
use release_automerge::config::SettingsInput;
use std::path::PathBuf;

pub use output::report_failure;

/// Cascade release branches forward in semver order
///
/// Merges the checked-out release branch into the next release branch (or
/// the develop branch) and opens a pull request when the merge conflicts.
#[derive(Debug, Parser)]
#[command(name = "automerge", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Running inside GitHub Actions
    #[arg(long, env = "GITHUB_ACTIONS", hide = true)]
    pub github_actions: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the branch a release branch would merge into
    Resolve(resolve::ResolveArgs),
}

/// Arguments for the sync run
#[derive(Debug, Args)]
struct RunArgs {
    /// Checked-out repository
    #[arg(long, env = "GITHUB_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Substring marking release branches [default: release]
    #[arg(long, env = "INPUT_RELEASE_BRANCH_TYPE")]
    release_branch_type: Option<String>,

    /// Branch used when no newer release branch exists [default: develop]
    #[arg(long, env = "INPUT_DEVELOP_BRANCH")]
    develop_branch: Option<String>,

    /// GitHub token
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    #[arg(long, env = "GITHUB_TOKEN", hide = true, hide_env_values = true)]
    env_github_token: Option<String>,

    #[arg(long, env = "GH_TOKEN", hide = true, hide_env_values = true)]
    env_gh_token: Option<String>,

    /// Remote whose prefix is stripped from branch names [default: origin]
    #[arg(long, env = "INPUT_REMOTE")]
    remote: Option<String>,

    /// Leave pre-release branches out of the version order
    #[arg(long, env = "INPUT_EXCLUDE_PRERELEASES")]
    exclude_prereleases: bool,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Settings file [default: <workspace>/.github/automerge.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Resolve the target branch without merging
    #[arg(long)]
    dry_run: bool,

    /// File that receives `result=<value>` for later workflow steps
    #[arg(long, env = "GITHUB_OUTPUT", hide = true)]
    output_file: Option<PathBuf>,
}

impl RunArgs {
    fn into_input(self) -> (SettingsInput, Option<PathBuf>) {
        let env_token = self
            .env_github_token
            .filter(|t| !t.trim().is_empty())
            .or(self.env_gh_token);
        let input = SettingsInput {
            workspace: self.workspace,
            repository: self.repository,
            release_branch_type: self.release_branch_type,
            develop_branch: self.develop_branch,
            github_token: self.github_token,
            env_token,
            remote: self.remote,
            exclude_prereleases: self.exclude_prereleases,
            api_url: self.api_url,
            config_file: self.config,
            dry_run: self.dry_run,
        };
        (input, self.output_file)
    }
}

/// Dispatch the parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Resolve(args)) => {
            resolve::run_resolve(&args);
            Ok(())
        }
        None => {
            let (input, output_file) = cli.run.into_input();
            sync::run_sync_command(input, output_file.as_deref()).await
        }
    }
}
