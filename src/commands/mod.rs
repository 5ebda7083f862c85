//! CLI command handlers for resolve-ref.
//!
//! - [`resolve`] - Resolve the checkout target and write it to the sinks

mod resolve;

pub use resolve::{resolve_command, ResolveOptions};
