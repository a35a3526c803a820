use thiserror::Error;

use crate::registry::SessionId;

/// Errors surfaced across the public inspector interface.
///
/// A stale subject handle is deliberately NOT an error: every query
/// degrades to an empty result and the session recovers on the next
/// valid selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// Operation against a closed or never-created session.
    #[error("unknown session {0}")]
    UnknownSession(SessionId),
}
