pub mod commands;
pub mod completion;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod output;
pub mod payload;
pub mod resolver;
pub mod sink;
#[doc(hidden)]
pub mod test_utils;

pub use context::TriggerContext;
pub use error::{ResolveError, Result};
pub use event::{EventKind, RefType};
pub use payload::{EventPayload, PayloadFields};
pub use resolver::{resolve, Resolution, FALLBACK_BRANCH};
