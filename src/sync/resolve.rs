//! Version resolution - pure functions over branch names
//!
//! No I/O happens here. Branch names go in, an ordered version list or a
//! target branch name comes out.

use regex::Regex;
use semver::Version;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Remote qualifier stripped from resolved targets
pub const DEFAULT_REMOTE: &str = "origin";

/// Strict `major.minor.patch[-pre][+build]` anywhere in a name
///
/// Candidates are confirmed with [`Version::parse`]. Partial versions such
/// as `release/1.2` are not padded to `1.2.0`; those branches stay out of
/// the ordering.
static SEMVER_IN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
    )
    .expect("semver pattern compiles")
});

/// Options for version sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    /// Keep pre-release versions (`1.0.0-rc.1`) in the result
    pub include_prereleases: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            include_prereleases: true,
        }
    }
}

/// Extract the first semantic version embedded anywhere in `name`
///
/// `origin/release/1.2.3` yields `1.2.3`. Names without a full
/// `major.minor.patch` triple yield `None`, so `release/1.2` is not
/// coerced to `1.2.0`.
pub fn parse_version(name: &str) -> Option<Version> {
    SEMVER_IN_NAME
        .find_iter(name.trim())
        .find_map(|m| Version::parse(m.as_str()).ok())
}

/// Semver precedence, ignoring build metadata
fn precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

fn sorted_pairs<S: AsRef<str>>(names: &[S], options: SortOptions) -> Vec<(String, Version)> {
    let mut pairs: Vec<(String, Version)> = names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter_map(|name| parse_version(name).map(|v| (name.to_string(), v)))
        .collect();

    // Stable sort, highest first
    pairs.sort_by(|(_, a), (_, b)| precedence(b, a));

    if !options.include_prereleases {
        pairs.retain(|(_, v)| v.pre.is_empty());
    }
    pairs
}

/// Parse, filter and sort versions found in `names`, highest first
pub fn normalize_and_sort<S: AsRef<str>>(names: &[S], options: SortOptions) -> Vec<Version> {
    sorted_pairs(names, options)
        .into_iter()
        .map(|(_, v)| v)
        .collect()
}

/// Like [`normalize_and_sort`] but returns the trimmed branch names
/// instead of the parsed versions
pub fn sort_branch_names<S: AsRef<str>>(names: &[S], options: SortOptions) -> Vec<String> {
    sorted_pairs(names, options)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

/// Strip a leading `<remote>/` qualifier
pub fn strip_remote<'a>(branch: &'a str, remote: &str) -> &'a str {
    branch
        .strip_prefix(remote)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(branch)
}

/// Find the branch to merge `current_branch` into
///
/// Uses default [`SortOptions`] and the `origin` remote.
pub fn resolve_successor<S: AsRef<str>>(
    branches: &[S],
    current_branch: &str,
    develop_branch: &str,
) -> String {
    resolve_successor_with(
        branches,
        current_branch,
        develop_branch,
        DEFAULT_REMOTE,
        SortOptions::default(),
    )
}

/// Find the branch to merge `current_branch` into
///
/// Walks the versions in ascending order and takes the first one whose
/// string occurs in `current_branch`. The version after it names the
/// target; its branch is returned without the remote qualifier. When there
/// is no match, no successor, or no branch carries the successor version,
/// `develop_branch` is returned.
///
/// Matching is by substring, so `release/1.0.10` also matches `1.0.1`.
pub fn resolve_successor_with<S: AsRef<str>>(
    branches: &[S],
    current_branch: &str,
    develop_branch: &str,
    remote: &str,
    options: SortOptions,
) -> String {
    let mut ascending = normalize_and_sort(branches, options);
    ascending.reverse();

    let successor = ascending
        .iter()
        .position(|v| current_branch.contains(&v.to_string()))
        .and_then(|i| ascending.get(i + 1));

    let Some(next) = successor else {
        return develop_branch.to_string();
    };

    let next = next.to_string();
    branches
        .iter()
        .map(|b| b.as_ref().trim())
        .find(|b| b.contains(&next))
        .map_or_else(
            || develop_branch.to_string(),
            |b| strip_remote(b, remote).to_string(),
        )
}
