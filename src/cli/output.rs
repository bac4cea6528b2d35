//! GitHub Actions output plumbing

use crate::cli::style::Stylize;
use anstream::eprintln;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Append `key=value` to the step output file (`GITHUB_OUTPUT`)
pub fn write_action_output(path: &Path, key: &str, value: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if value.contains('\n') {
        writeln!(file, "{key}<<__AUTOMERGE_EOF__\n{value}\n__AUTOMERGE_EOF__")
    } else {
        writeln!(file, "{key}={value}")
    }
}

/// Print a fatal error
///
/// Inside Actions the message becomes an `::error::` annotation so the run
/// is marked failed with it.
pub fn report_failure(error: &anyhow::Error, in_actions: bool) {
    if in_actions {
        // Annotations are single-line; %0A is the escaped newline
        let message = format!("{error:#}").replace('%', "%25").replace('\n', "%0A");
        eprintln!("::error::{message}");
    } else {
        eprintln!("{} {error:#}", "error:".failure());
    }
}
