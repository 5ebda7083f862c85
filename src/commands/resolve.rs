//! Resolve command handler.
//!
//! Loads config and payload, resolves the checkout, then writes the sinks and
//! prints diagnostics.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::get_effective_config;
use crate::context::TriggerContext;
use crate::error::{ResolveError, Result};
use crate::event::{EventKind, RefType};
use crate::output::{print_diagnostics, print_warning};
use crate::payload::EventPayload;
use crate::resolver::{resolve, Resolution};
use crate::sink::write_resolution;

/// Options for the resolve command. Unset strings are empty.
#[derive(Debug, Default, Clone)]
pub struct ResolveOptions {
    pub event_name: String,
    pub event_path: Option<PathBuf>,
    pub ref_name: String,
    pub ref_type: String,
    pub full_ref: String,
    pub sha: String,
    pub repository: String,
    /// Environment-propagation file (`GITHUB_ENV`)
    pub env_file: Option<PathBuf>,
    /// Step-output file (`GITHUB_OUTPUT`)
    pub output_file: Option<PathBuf>,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Fall back to an empty payload when the event file is not valid JSON
    pub lenient_payload: bool,
    /// Directory searched for the default config file
    pub workspace: PathBuf,
}

impl ResolveOptions {
    fn context(&self) -> TriggerContext {
        TriggerContext::new(EventKind::from_name(&self.event_name))
            .with_ref_name(self.ref_name.clone(), RefType::from_name(&self.ref_type))
            .with_full_ref(self.full_ref.clone())
            .with_sha(self.sha.clone())
            .with_repository(self.repository.clone())
    }
}

/// Run the resolver and write its results.
///
/// # Errors
///
/// Fails on an invalid config, an unreadable or (unless lenient) malformed
/// payload, or a sink that cannot be written.
pub fn resolve_command(opts: &ResolveOptions) -> Result<Resolution> {
    let config = get_effective_config(non_empty(&opts.config), &opts.workspace)?;
    let lenient = opts.lenient_payload || config.lenient_payload;

    let payload = match EventPayload::load(non_empty(&opts.event_path)) {
        Ok(payload) => payload,
        Err(e @ ResolveError::MalformedPayload { .. }) if lenient => {
            warn!(error = %e, "ignoring malformed event payload");
            print_warning(&format!("{e}; continuing with an empty payload"));
            EventPayload::empty()
        }
        Err(e) => return Err(e),
    };

    let ctx = opts.context();
    debug!(?ctx, "trigger context");

    let resolution = resolve(&ctx, &payload, &config.fallback_branch);

    write_resolution(
        &resolution,
        non_empty(&opts.env_file),
        non_empty(&opts.output_file),
    )?;
    print_diagnostics(&config.diagnostic_tag, &ctx.event, &resolution);

    Ok(resolution)
}

// Actions sets some variables to an empty string rather than leaving them unset.
fn non_empty(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| !p.as_os_str().is_empty())
}
