//! Resolve command - show where a release branch would be merged

use anstream::println;
use clap::Args;
use release_automerge::sync::{SortOptions, resolve_successor_with, sort_branch_names};

use crate::cli::style::{Stylize, arrow};

/// Arguments for `automerge resolve`
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Branch to resolve the target for
    #[arg(long)]
    current: String,

    /// Fallback branch when there is no newer release
    #[arg(long, default_value = "develop")]
    develop: String,

    /// Remote prefix to strip from the result
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Leave pre-release branches out of the version order
    #[arg(long)]
    exclude_prereleases: bool,

    /// Print the version order before the target
    #[arg(long)]
    show_order: bool,

    /// Candidate branch names (e.g. from `git branch -r`)
    #[arg(required = true)]
    branches: Vec<String>,
}

/// Print the resolved target; pure, touches neither git nor GitHub
pub fn run_resolve(args: &ResolveArgs) {
    let options = SortOptions {
        include_prereleases: !args.exclude_prereleases,
    };

    if args.show_order {
        for name in sort_branch_names(&args.branches, options) {
            println!("  {}", name.muted());
        }
    }

    let target =
        resolve_successor_with(&args.branches, &args.current, &args.develop, &args.remote, options);
    println!("{} {} {}", args.current.accent(), arrow(), target.accent());
}
