//! Trigger event and ref type classification.
//!
//! GitHub Actions reports both as free-form strings (`GITHUB_EVENT_NAME`,
//! `GITHUB_REF_TYPE`). Only a few values change how a checkout is resolved,
//! so everything else is carried through unchanged in a catch-all variant.

/// The kind of event that triggered the workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// `pull_request`: check out the PR head, which may live in a fork
    PullRequest,
    /// `workflow_dispatch`: a manual run against a chosen ref
    WorkflowDispatch,
    /// Any other event (`push`, `schedule`, `pull_request_target`, ...)
    Other(String),
}

impl EventKind {
    /// Classify an event name. Matching is exact, as Actions emits lowercase names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "pull_request" => EventKind::PullRequest,
            "workflow_dispatch" => EventKind::WorkflowDispatch,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// The event name as Actions spells it.
    pub fn name(&self) -> &str {
        match self {
            EventKind::PullRequest => "pull_request",
            EventKind::WorkflowDispatch => "workflow_dispatch",
            EventKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether `GITHUB_REF_NAME` names a branch or a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefType {
    Branch,
    Tag,
    /// Unset or unrecognized
    Unknown,
}

impl RefType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "branch" => RefType::Branch,
            "tag" => RefType::Tag,
            _ => RefType::Unknown,
        }
    }
}
