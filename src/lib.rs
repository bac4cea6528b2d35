//! release-automerge: cascade release branches forward
//!
//! On a push to a release branch, finds the next release branch in semver
//! order (or the develop branch) and merges into it. When the merge
//! conflicts, opens a pull request instead, unless one is already open or
//! the branches have no content difference.
//!
//! # Modules
//!
//! - [`sync`] - version resolution (pure) and the merge orchestrator
//! - [`repo`] - local git access
//! - [`platform`] - GitHub API access
//! - [`auth`] - token discovery
//! - [`config`] - run settings

pub mod auth;
pub mod config;
pub mod error;
pub mod platform;
pub mod repo;
pub mod sync;
pub mod types;
