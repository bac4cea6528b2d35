//! Release branch sync engine
//!
//! Two halves, matching the pure/effectful split:
//! 1. Resolve - order versions and pick the successor branch (pure)
//! 2. Execute - fetch, merge, and fall back to a PR (effectful)

mod execute;
mod resolve;

pub use execute::{SyncOptions, run_sync};
pub use resolve::{
    DEFAULT_REMOTE, SortOptions, normalize_and_sort, parse_version, resolve_successor,
    resolve_successor_with, sort_branch_names, strip_remote,
};
