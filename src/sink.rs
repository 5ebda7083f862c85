//! Writing results to the Actions environment and step-output files.
//!
//! Both files (`GITHUB_ENV` and `GITHUB_OUTPUT`) take one entry per line as
//! `key=value`. Values with line breaks use the heredoc form
//! `key<<DELIMITER` ... `DELIMITER` so they cannot smuggle in extra entries.

use crate::error::{ResolveError, Result};
use crate::resolver::Resolution;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Environment variable exported to later steps of the job.
pub const DEFAULT_BRANCH_ENV: &str = "DEFAULT_BRANCH";

pub const DEFAULT_BRANCH_OUTPUT: &str = "default_branch";
pub const CHECKOUT_REPOSITORY_OUTPUT: &str = "checkout_repository";
pub const CHECKOUT_REF_OUTPUT: &str = "checkout_ref";

const HEREDOC_DELIMITER: &str = "ghadelimiter";

/// Entries for the environment-propagation file.
pub fn env_entries(resolution: &Resolution) -> Vec<(&'static str, &str)> {
    vec![(DEFAULT_BRANCH_ENV, resolution.default_branch.as_str())]
}

/// Entries for the step-output file.
pub fn output_entries(resolution: &Resolution) -> Vec<(&'static str, &str)> {
    vec![
        (DEFAULT_BRANCH_OUTPUT, resolution.default_branch.as_str()),
        (
            CHECKOUT_REPOSITORY_OUTPUT,
            resolution.checkout_repository.as_str(),
        ),
        (CHECKOUT_REF_OUTPUT, resolution.checkout_ref.as_str()),
    ]
}

/// Format a single entry, including its trailing newline.
pub fn format_entry(key: &str, value: &str) -> Result<String> {
    if key.is_empty() || key.contains(['=', '\n', '\r']) {
        return Err(ResolveError::InvalidKey(key.to_string()));
    }

    if value.contains(['\n', '\r']) {
        let delimiter = heredoc_delimiter(value);
        Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
    } else {
        Ok(format!("{key}={value}\n"))
    }
}

/// Pick a heredoc delimiter that does not occur anywhere in `value`.
///
/// The choice depends only on `value`, so the same entry always formats the same way.
fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = HEREDOC_DELIMITER.to_string();
    let mut suffix = 0u32;
    while value.contains(&delimiter) {
        suffix += 1;
        delimiter = format!("{HEREDOC_DELIMITER}_{suffix}");
    }
    delimiter
}

/// Append entries to the file at `path`, creating it if needed.
pub fn append_entries(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
    let mut content = String::new();
    for (key, value) in entries {
        content.push_str(&format_entry(key, value)?);
    }

    let sink_error = |source| ResolveError::Sink {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(sink_error)?;
    file.write_all(content.as_bytes()).map_err(sink_error)?;

    debug!(path = %path.display(), count = entries.len(), "appended entries");
    Ok(())
}

/// Write a resolution to whichever sinks are configured.
///
/// A sink without a path is skipped with a warning.
pub fn write_resolution(
    resolution: &Resolution,
    env_file: Option<&Path>,
    output_file: Option<&Path>,
) -> Result<()> {
    match env_file {
        Some(path) => append_entries(path, &env_entries(resolution))?,
        None => warn!("no environment file configured (GITHUB_ENV), skipping {DEFAULT_BRANCH_ENV}"),
    }

    match output_file {
        Some(path) => append_entries(path, &output_entries(resolution))?,
        None => warn!("no step output file configured (GITHUB_OUTPUT), skipping outputs"),
    }

    Ok(())
}
