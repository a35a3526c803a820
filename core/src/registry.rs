//! Session registry: owns every open session and hands out ids.
//!
//! Ids are monotonically increasing and never reused, so a stale id
//! held by an embedding layer can never silently address a newer
//! session. All session operations are reachable through the registry
//! by id; unknown or closed ids answer with an error instead of
//! panicking.

use hashbrown::HashMap;
use stateview_types::{AbilityRecord, AttributeSetNode, EffectRecord, TagNode};

use crate::config::InspectorConfig;
use crate::error::InspectError;
use crate::session::{RefreshOutcome, Session, TagScope};
use crate::subject::{SubjectHandle, SubjectSource};

/// Opaque session identifier. Unique for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
    next_id: u64,
    config: InspectorConfig,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// New sessions created afterwards inherit `config` defaults.
    pub fn with_config(config: InspectorConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            next_id: 0,
            config,
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────────

    pub fn create_session(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, Session::new(&self.config));
        tracing::info!(session = %id, "session opened");
        id
    }

    /// Close a session. Closing an unknown or already closed id is a
    /// no-op.
    pub fn close_session(&mut self, id: SessionId) {
        if self.sessions.remove(&id).is_some() {
            tracing::info!(session = %id, "session closed");
        } else {
            tracing::debug!(session = %id, "close of unknown session ignored");
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn get(&self, id: SessionId) -> Result<&Session, InspectError> {
        self.sessions.get(&id).ok_or(InspectError::UnknownSession(id))
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session, InspectError> {
        self.sessions
            .get_mut(&id)
            .ok_or(InspectError::UnknownSession(id))
    }

    // ─── Delegated session operations ────────────────────────────────

    pub fn select_subject(
        &mut self,
        id: SessionId,
        subject: Option<SubjectHandle>,
    ) -> Result<(), InspectError> {
        self.get_mut(id)?.select_subject(subject);
        Ok(())
    }

    pub fn set_polling_enabled(
        &mut self,
        id: SessionId,
        enabled: bool,
    ) -> Result<(), InspectError> {
        self.get_mut(id)?.set_polling_enabled(enabled);
        Ok(())
    }

    pub fn request_refresh(
        &mut self,
        id: SessionId,
        source: &dyn SubjectSource,
    ) -> Result<RefreshOutcome, InspectError> {
        Ok(self.get_mut(id)?.request_refresh(source))
    }

    pub fn ability_tree(&self, id: SessionId) -> Result<&[AbilityRecord], InspectError> {
        Ok(self.get(id)?.ability_tree())
    }

    pub fn effect_tree(&self, id: SessionId) -> Result<&[EffectRecord], InspectError> {
        Ok(self.get(id)?.effect_tree())
    }

    pub fn attribute_tree(&self, id: SessionId) -> Result<&[AttributeSetNode], InspectError> {
        Ok(self.get(id)?.attribute_tree())
    }

    pub fn tag_tree(&self, id: SessionId, scope: TagScope) -> Result<&TagNode, InspectError> {
        Ok(self.get(id)?.tag_tree(scope))
    }

    pub fn on_selection_changed(
        &mut self,
        id: SessionId,
        callback: impl FnMut(Option<SubjectHandle>) + 'static,
    ) -> Result<(), InspectError> {
        self.get_mut(id)?.on_selection_changed(callback);
        Ok(())
    }

    pub fn on_refresh_completed(
        &mut self,
        id: SessionId,
        callback: impl FnMut(RefreshOutcome) + 'static,
    ) -> Result<(), InspectError> {
        self.get_mut(id)?.on_refresh_completed(callback);
        Ok(())
    }
}
