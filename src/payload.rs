//! Best-effort extraction of fields from the Actions event payload.
//!
//! The payload is the JSON document at `GITHUB_EVENT_PATH`. Its shape depends
//! on the event, so nothing here is validated against a schema: a field that
//! is missing, null, or not a string reads as the empty string.

use crate::error::{ResolveError, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

const REPO_DEFAULT_BRANCH: &str = "/repository/default_branch";
const REPO_FULL_NAME: &str = "/repository/full_name";
const PR_HEAD_REF: &str = "/pull_request/head/ref";
const PR_HEAD_SHA: &str = "/pull_request/head/sha";
const PR_HEAD_REPO_FULL_NAME: &str = "/pull_request/head/repo/full_name";

/// A parsed event payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload {
    value: Value,
}

/// The payload fields the resolver looks at. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadFields {
    /// `repository.default_branch`
    pub default_branch: String,
    /// `repository.full_name`
    pub repository: String,
    /// `pull_request.head.ref`
    pub head_ref: String,
    /// `pull_request.head.sha`
    pub head_sha: String,
    /// `pull_request.head.repo.full_name`
    pub head_repository: String,
}

impl EventPayload {
    /// A payload with no fields, used when no event file is available.
    pub fn empty() -> Self {
        Self { value: Value::Null }
    }

    /// Parse a payload from JSON text. Blank input is an empty payload.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::empty());
        }
        let value: Value = serde_json::from_str(content)?;
        Ok(Self { value })
    }

    /// Load the payload file at `path`.
    ///
    /// An unset path or a file that does not exist gives an empty payload.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no event payload path given, using empty payload");
            return Ok(Self::empty());
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "event payload file not found, using empty payload");
                return Ok(Self::empty());
            }
            Err(source) => {
                return Err(ResolveError::PayloadRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(&content).map_err(|source| ResolveError::MalformedPayload {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the string at a JSON pointer, or `""` if there is none.
    pub fn field(&self, pointer: &str) -> &str {
        self.value
            .pointer(pointer)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Extract every field the resolver needs.
    pub fn fields(&self) -> PayloadFields {
        let fields = PayloadFields {
            default_branch: self.field(REPO_DEFAULT_BRANCH).to_string(),
            repository: self.field(REPO_FULL_NAME).to_string(),
            head_ref: self.field(PR_HEAD_REF).to_string(),
            head_sha: self.field(PR_HEAD_SHA).to_string(),
            head_repository: self.field(PR_HEAD_REPO_FULL_NAME).to_string(),
        };
        debug!(?fields, "extracted payload fields");
        fields
    }
}

impl Default for EventPayload {
    fn default() -> Self {
        Self::empty()
    }
}
