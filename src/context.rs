//! Inputs describing the triggering workflow run.

use crate::event::{EventKind, RefType};

/// Everything the resolver knows about the run, apart from the payload.
///
/// Values mirror the Actions environment (`GITHUB_EVENT_NAME`, `GITHUB_REF_NAME`,
/// `GITHUB_REF_TYPE`, `GITHUB_REF`, `GITHUB_SHA`, `GITHUB_REPOSITORY`).
/// Unset values are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    pub event: EventKind,
    /// Short ref name, e.g. `release-1.2` or `v1.0.0`
    pub ref_name: String,
    pub ref_type: RefType,
    /// Full ref path, e.g. `refs/heads/release-1.2`
    pub full_ref: String,
    /// Commit that triggered the run
    pub sha: String,
    /// `owner/name` of the repository the workflow runs in
    pub repository: String,
}

impl TriggerContext {
    /// Create a context for `event` with every other input unset.
    pub fn new(event: EventKind) -> Self {
        Self {
            event,
            ref_name: String::new(),
            ref_type: RefType::Unknown,
            full_ref: String::new(),
            sha: String::new(),
            repository: String::new(),
        }
    }

    /// Set the short ref name and its type.
    pub fn with_ref_name(mut self, ref_name: impl Into<String>, ref_type: RefType) -> Self {
        self.ref_name = ref_name.into();
        self.ref_type = ref_type;
        self
    }

    /// Set the full ref path.
    pub fn with_full_ref(mut self, full_ref: impl Into<String>) -> Self {
        self.full_ref = full_ref.into();
        self
    }

    /// Set the triggering commit.
    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = sha.into();
        self
    }

    /// Set the triggering repository.
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }
}
