//! Default command - merge the current release branch forward

use crate::cli::context::CommandContext;
use crate::cli::output::write_action_output;
use crate::cli::style::{Stylize, arrow, check};
use anstream::println;
use anyhow::Context;
use release_automerge::config::SettingsInput;
use release_automerge::sync::run_sync;
use release_automerge::types::{SkipReason, SyncOutcome};
use std::path::Path;

/// Run one sync pass and report the outcome
pub async fn run_sync_command(input: SettingsInput, output_file: Option<&Path>) -> anyhow::Result<()> {
    let ctx = CommandContext::new(input).await?;
    let options = ctx.settings.sync_options();

    let outcome = run_sync(&ctx.repo, ctx.platform.as_ref(), &options)
        .await
        .context("sync run failed")?;

    print_outcome(&outcome);

    if let Some(path) = output_file {
        write_action_output(path, "result", outcome.output())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

fn print_outcome(outcome: &SyncOutcome) {
    match outcome {
        SyncOutcome::Merged { from, to, sha } => {
            println!(
                "{} Merged {} {} {}",
                check(),
                from.accent(),
                arrow(),
                to.accent()
            );
            println!("  {} {}", "commit".muted(), sha.accent());
        }
        SyncOutcome::PullRequestCreated(pr) => {
            println!(
                "{} Opened PR #{} {} {} {}",
                check(),
                pr.number,
                pr.head_ref.accent(),
                arrow(),
                pr.base_ref.accent()
            );
            println!("  {}", pr.html_url.accent());
        }
        SyncOutcome::Skipped(SkipReason::DryRun { from, to }) => {
            println!(
                "{} {} {} {}",
                "Dry run:".emphasis(),
                from.accent(),
                arrow(),
                to.accent()
            );
        }
        SyncOutcome::Skipped(reason) => {
            println!("{} {}", "Skipped:".muted(), reason.muted());
        }
    }
}
