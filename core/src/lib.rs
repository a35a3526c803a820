pub mod classify;
pub mod config;
pub mod error;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod subject;

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports for convenience
pub use classify::{AbilitySignals, classify};
pub use config::{ConfigError, InspectorConfig, default_config_path};
pub use error::InspectError;
pub use registry::{SessionId, SessionRegistry};
pub use session::{ChangeState, RefreshOutcome, Session, SessionEvent, TagScope};
pub use subject::{ActivationProbe, SubjectHandle, SubjectQuery, SubjectSource};
