//! Decide what a lint job checks out and which branch it treats as baseline.

use crate::context::TriggerContext;
use crate::event::{EventKind, RefType};
use crate::payload::{EventPayload, PayloadFields};
use tracing::{debug, info, warn};

/// Branch assumed when the payload does not name the repository's default branch.
pub const FALLBACK_BRANCH: &str = "main";

/// The resolved checkout target and baseline branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Branch the rest of the pipeline treats as the default branch
    pub default_branch: String,
    /// `owner/name` of the repository to check out
    pub checkout_repository: String,
    /// Commit SHA or ref to check out
    pub checkout_ref: String,
}

/// Resolve the checkout target for a run.
///
/// `fallback_branch` stands in for the repository's default branch when the
/// payload does not carry one, so `default_branch` is never empty as long as
/// `fallback_branch` is not.
pub fn resolve(ctx: &TriggerContext, payload: &EventPayload, fallback_branch: &str) -> Resolution {
    let fields = payload.fields();
    let repo_default_branch = repo_default_branch(&fields, fallback_branch);

    let triggering_repository = if ctx.repository.is_empty() {
        fields.repository.clone()
    } else {
        ctx.repository.clone()
    };

    let mut resolution = Resolution {
        default_branch: repo_default_branch,
        checkout_repository: triggering_repository,
        checkout_ref: ctx.sha.clone(),
    };

    match &ctx.event {
        EventKind::PullRequest => apply_pull_request(&mut resolution, &fields),
        EventKind::WorkflowDispatch => apply_workflow_dispatch(&mut resolution, ctx),
        EventKind::Other(name) => {
            debug!(event = %name, "no event-specific handling, using repository defaults");
        }
    }

    info!(
        event = %ctx.event,
        default_branch = %resolution.default_branch,
        checkout_repository = %resolution.checkout_repository,
        checkout_ref = %resolution.checkout_ref,
        "resolved checkout"
    );
    resolution
}

fn repo_default_branch(fields: &PayloadFields, fallback_branch: &str) -> String {
    if fields.default_branch.is_empty() {
        warn!(
            fallback = fallback_branch,
            "event payload has no repository.default_branch, assuming fallback branch"
        );
        fallback_branch.to_string()
    } else {
        fields.default_branch.clone()
    }
}

// A fork's head branch does not exist in the base repository, so the checkout
// must come from the head repository and the baseline must name its branch.
fn apply_pull_request(resolution: &mut Resolution, fields: &PayloadFields) {
    if !fields.head_repository.is_empty() {
        resolution.checkout_repository = fields.head_repository.clone();
    }
    if !fields.head_sha.is_empty() {
        resolution.checkout_ref = fields.head_sha.clone();
    }
    if !fields.head_ref.is_empty() {
        resolution.default_branch = fields.head_ref.clone();
    }
}

fn apply_workflow_dispatch(resolution: &mut Resolution, ctx: &TriggerContext) {
    if ctx.ref_type == RefType::Branch && !ctx.ref_name.is_empty() {
        resolution.default_branch = ctx.ref_name.clone();
    } else {
        debug!(
            ref_name = %ctx.ref_name,
            ref_type = ?ctx.ref_type,
            "dispatch ref is not a branch, keeping repository default branch"
        );
    }
    if !ctx.full_ref.is_empty() {
        resolution.checkout_ref = ctx.full_ref.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA: &str = "ffffffffffffffffffffffffffffffffffffffff";
    const HEAD_SHA: &str = "0123456789abcdef0123456789abcdef01234567";

    fn payload(json: &str) -> EventPayload {
        EventPayload::parse(json).unwrap()
    }

    fn fork_pr_payload() -> EventPayload {
        payload(
            r#"{
                "repository": {"full_name": "acme/widgets", "default_branch": "develop"},
                "pull_request": {"head": {
                    "ref": "fix-typo",
                    "sha": "0123456789abcdef0123456789abcdef01234567",
                    "repo": {"full_name": "contributor/widgets"}
                }}
            }"#,
        )
    }

    fn ctx(event: &str) -> TriggerContext {
        TriggerContext::new(EventKind::from_name(event))
            .with_sha(SHA)
            .with_repository("acme/widgets")
    }

    // ------------------------------------------------------------------
    // pull_request
    // ------------------------------------------------------------------

    #[test]
    fn test_pull_request_uses_head_ref_as_default_branch() {
        let res = resolve(&ctx("pull_request"), &fork_pr_payload(), FALLBACK_BRANCH);
        assert_eq!(res.default_branch, "fix-typo");
        assert_ne!(res.default_branch, "develop");
    }

    #[test]
    fn test_pull_request_checks_out_fork_head() {
        let res = resolve(&ctx("pull_request"), &fork_pr_payload(), FALLBACK_BRANCH);
        assert_eq!(res.checkout_repository, "contributor/widgets");
        assert_eq!(res.checkout_ref, HEAD_SHA);
    }

    #[test]
    fn test_pull_request_without_head_repo_uses_triggering_repository() {
        let payload = payload(
            r#"{
                "repository": {"full_name": "acme/widgets", "default_branch": "develop"},
                "pull_request": {"head": {"ref": "fix-typo", "sha": "0123456789abcdef0123456789abcdef01234567"}}
            }"#,
        );
        let res = resolve(&ctx("pull_request"), &payload, FALLBACK_BRANCH);
        assert_eq!(res.checkout_repository, "acme/widgets");
        assert_eq!(res.checkout_ref, HEAD_SHA);
    }

    #[test]
    fn test_pull_request_without_head_info_uses_repository_defaults() {
        let payload = payload(r#"{"repository": {"default_branch": "develop"}}"#);
        let res = resolve(&ctx("pull_request"), &payload, FALLBACK_BRANCH);
        assert_eq!(res.default_branch, "develop");
        assert_eq!(res.checkout_repository, "acme/widgets");
        assert_eq!(res.checkout_ref, SHA);
    }

    // ------------------------------------------------------------------
    // workflow_dispatch
    // ------------------------------------------------------------------

    #[test]
    fn test_dispatch_on_branch_uses_ref_name() {
        let ctx = ctx("workflow_dispatch")
            .with_ref_name("release-1.2", RefType::Branch)
            .with_full_ref("refs/heads/release-1.2");
        let payload = payload(r#"{"repository": {"default_branch": "develop"}}"#);

        let res = resolve(&ctx, &payload, FALLBACK_BRANCH);
        assert_eq!(res.default_branch, "release-1.2");
        assert_eq!(res.checkout_ref, "refs/heads/release-1.2");
        assert_eq!(res.checkout_repository, "acme/widgets");
    }

    #[test]
    fn test_dispatch_on_tag_uses_repository_default_branch() {
        let ctx = ctx("workflow_dispatch")
            .with_ref_name("v1.0.0", RefType::Tag)
            .with_full_ref("refs/tags/v1.0.0");
        let payload = payload(r#"{"repository": {"default_branch": "develop"}}"#);

        let res = resolve(&ctx, &payload, FALLBACK_BRANCH);
        assert_eq!(res.default_branch, "develop");
        assert_eq!(res.checkout_ref, "refs/tags/v1.0.0");
    }

    #[test]
    fn test_dispatch_with_empty_branch_name_uses_repository_default_branch() {
        let ctx = ctx("workflow_dispatch").with_ref_name("", RefType::Branch);
        let payload = payload(r#"{"repository": {"default_branch": "develop"}}"#);

        let res = resolve(&ctx, &payload, FALLBACK_BRANCH);
        assert_eq!(res.default_branch, "develop");
    }

    #[test]
    fn test_dispatch_without_full_ref_checks_out_triggering_commit() {
        let ctx = ctx("workflow_dispatch").with_ref_name("release-1.2", RefType::Branch);
        let res = resolve(&ctx, &EventPayload::empty(), FALLBACK_BRANCH);
        assert_eq!(res.checkout_ref, SHA);
    }

    #[test]
    fn test_dispatch_ignores_pull_request_fields() {
        let ctx = ctx("workflow_dispatch").with_ref_name("release-1.2", RefType::Branch);
        let res = resolve(&ctx, &fork_pr_payload(), FALLBACK_BRANCH);
        assert_eq!(res.checkout_repository, "acme/widgets");
        assert_eq!(res.checkout_ref, SHA);
    }

    // ------------------------------------------------------------------
    // other events and fallbacks
    // ------------------------------------------------------------------

    #[test]
    fn test_push_uses_repository_defaults() {
        let ctx = ctx("push")
            .with_ref_name("feature", RefType::Branch)
            .with_full_ref("refs/heads/feature");
        let res = resolve(&ctx, &fork_pr_payload(), FALLBACK_BRANCH);

        assert_eq!(res.default_branch, "develop");
        assert_eq!(res.checkout_repository, "acme/widgets");
        assert_eq!(res.checkout_ref, SHA);
    }

    #[test]
    fn test_pull_request_target_is_handled_like_push() {
        let res = resolve(
            &ctx("pull_request_target"),
            &fork_pr_payload(),
            FALLBACK_BRANCH,
        );
        assert_eq!(res.default_branch, "develop");
        assert_eq!(res.checkout_repository, "acme/widgets");
        assert_eq!(res.checkout_ref, SHA);
    }

    #[test]
    fn test_missing_default_branch_falls_back_to_main() {
        let payload = payload(r#"{"repository": {"full_name": "acme/widgets"}}"#);
        for event in ["push", "pull_request", "workflow_dispatch", ""] {
            let res = resolve(&ctx(event), &payload, FALLBACK_BRANCH);
            assert_eq!(res.default_branch, "main", "event: {:?}", event);
        }
    }

    #[test]
    fn test_fallback_branch_is_configurable() {
        let res = resolve(&ctx("push"), &EventPayload::empty(), "trunk");
        assert_eq!(res.default_branch, "trunk");
    }

    #[test]
    fn test_payload_repository_used_when_context_has_none() {
        let ctx = TriggerContext::new(EventKind::from_name("push")).with_sha(SHA);
        let res = resolve(&ctx, &fork_pr_payload(), FALLBACK_BRANCH);
        assert_eq!(res.checkout_repository, "acme/widgets");
    }

    #[test]
    fn test_context_repository_preferred_over_payload() {
        let ctx = TriggerContext::new(EventKind::from_name("push"))
            .with_sha(SHA)
            .with_repository("acme/renamed-widgets");
        let res = resolve(&ctx, &fork_pr_payload(), FALLBACK_BRANCH);
        assert_eq!(res.checkout_repository, "acme/renamed-widgets");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let ctx = ctx("pull_request");
        let payload = fork_pr_payload();
        assert_eq!(
            resolve(&ctx, &payload, FALLBACK_BRANCH),
            resolve(&ctx, &payload, FALLBACK_BRANCH)
        );
    }
}
