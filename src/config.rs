use crate::error::{ResolveError, Result};
use crate::resolver::FALLBACK_BRANCH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the workspace when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = ".github/resolve-ref.toml";

/// Tag prefixed to every diagnostic line on stdout.
pub const DEFAULT_DIAGNOSTIC_TAG: &str = "[resolve-ref]";

// ============================================================================
// Configuration
// ============================================================================

/// Settings for a resolve-ref run.
///
/// Every field is optional in the TOML file and falls back to its default,
/// so partial configs work.
///
/// # Example
///
/// ```toml
/// # Branch assumed when the event payload has no repository.default_branch
/// fallback_branch = "main"
///
/// # Prefix for the diagnostic lines printed to stdout
/// diagnostic_tag = "[resolve-ref]"
///
/// # Resolve against an empty payload instead of failing when the event
/// # file is not valid JSON
/// lenient_payload = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Branch assumed when the payload does not name the default branch.
    #[serde(default = "default_fallback_branch")]
    pub fallback_branch: String,

    /// Prefix for diagnostic lines.
    #[serde(default = "default_diagnostic_tag")]
    pub diagnostic_tag: String,

    /// Whether a malformed payload falls back to an empty one.
    ///
    /// When `false`, an unparseable event file fails the run.
    #[serde(default)]
    pub lenient_payload: bool,
}

fn default_fallback_branch() -> String {
    FALLBACK_BRANCH.to_string()
}

fn default_diagnostic_tag() -> String {
    DEFAULT_DIAGNOSTIC_TAG.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_branch: default_fallback_branch(),
            diagnostic_tag: default_diagnostic_tag(),
            lenient_payload: false,
        }
    }
}

// ============================================================================
// Config Validation
// ============================================================================

use std::error::Error;
use std::fmt;

/// Error type for configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The fallback branch is empty, so the default branch could end up empty.
    EmptyFallbackBranch,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyFallbackBranch => {
                write!(f, "`fallback_branch` must not be empty")
            }
        }
    }
}

impl Error for ConfigError {}

/// Validate a configuration.
///
/// # Validation Rules
///
/// - `fallback_branch` must be non-empty (and not just whitespace)
pub fn validate_config(config: &Config) -> std::result::Result<(), ConfigError> {
    if config.fallback_branch.trim().is_empty() {
        return Err(ConfigError::EmptyFallbackBranch);
    }

    Ok(())
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate the config file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or fails
/// validation.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ResolveError::Config(format!(
            "Failed to read config file at {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| {
        ResolveError::Config(format!(
            "Failed to parse config file at {}: {}",
            path.display(),
            e
        ))
    })?;

    validate_config(&config).map_err(|e| {
        ResolveError::Config(format!("Invalid config file at {}: {}", path.display(), e))
    })?;

    Ok(config)
}

/// Resolve which config applies to a run.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] under
/// `workspace` is used if present, otherwise the defaults.
pub fn get_effective_config(explicit: Option<&Path>, workspace: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path: PathBuf = workspace.join(DEFAULT_CONFIG_PATH);
    if default_path.is_file() {
        tracing::debug!(path = %default_path.display(), "loading workspace config");
        return load_config(&default_path);
    }

    Ok(Config::default())
}
