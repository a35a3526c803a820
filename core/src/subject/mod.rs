//! Boundary to the external subject system.
//!
//! The subject system (ability/effect/attribute storage) lives outside
//! this crate. It implements [`SubjectSource`], a versioned read-only
//! accessor contract: every field the inspector needs is a formal
//! getter here, never ad-hoc reflection into the live object. Handles
//! are generation-checked capabilities that must be revalidated on
//! every use; the source answers `None` for a handle whose slot has
//! been reused or destroyed.

mod query;

use serde::{Deserialize, Serialize};
use stateview_types::{ModifierOp, PredictionState};

pub use query::SubjectQuery;

/// Weak reference to a live subject. Never assumed valid between two
/// calls; the index/generation pair is checked by the source on each
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectHandle {
    pub index: u32,
    pub generation: u32,
}

impl SubjectHandle {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Result of asking an ability whether it could activate right now.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivationProbe {
    pub ok: bool,
    /// Why activation would fail, when the subject can say.
    pub failure_reason: Option<String>,
}

impl ActivationProbe {
    pub fn ok() -> Self {
        Self {
            ok: true,
            failure_reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            failure_reason: Some(reason.into()),
        }
    }
}

/// One granted ability as reported by the subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySource {
    /// Spec handle, stable until the ability is regranted.
    pub id: u64,
    pub type_name: String,
    pub level: i32,
    pub is_active: bool,
    pub active_count: u32,
    pub input_id: Option<i32>,
    /// Input for this ability's binding is currently blocked.
    pub input_blocked: bool,
    /// The ability's tags conflict with the subject's blocked tags.
    pub tag_blocked: bool,
    pub cooldown_remaining: f32,
    pub cooldown_duration: f32,
    /// Debug labels of live tasks on running instances. Only meaningful
    /// while `is_active`.
    pub task_labels: Vec<String>,
}

/// One modifier as defined on an effect's definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierSource {
    pub attribute: String,
    pub op: ModifierOp,
}

/// One active effect as reported by the subject.
///
/// `modifier_defs` comes from the effect's definition and
/// `evaluated_magnitudes` from the live spec; they correspond
/// positionally but are independently sized lists in a transient
/// snapshot, so consumers must pair them defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectSource {
    pub id: u64,
    pub type_name: String,
    pub stack_count: u32,
    pub level: f32,
    /// Raw duration in seconds; `<= 0` means permanent.
    pub duration_secs: f32,
    pub time_remaining_secs: f32,
    pub prediction: PredictionState,
    pub granted_tags: Vec<String>,
    pub modifier_defs: Vec<ModifierSource>,
    pub evaluated_magnitudes: Vec<f32>,
}

/// One attribute set with its current values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSetSource {
    pub set_name: String,
    pub attributes: Vec<AttributeValueSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValueSource {
    pub name: String,
    pub base_value: f32,
    pub current_value: f32,
}

/// Read-only accessor contract the subject system must expose.
///
/// `None` means the handle is stale or the subject was destroyed; the
/// facade turns that into empty results. Implementations must not cache
/// and must reflect live state at call time.
pub trait SubjectSource {
    fn abilities(&self, subject: SubjectHandle) -> Option<Vec<AbilitySource>>;
    fn active_effects(&self, subject: SubjectHandle) -> Option<Vec<EffectSource>>;
    fn attribute_sets(&self, subject: SubjectHandle) -> Option<Vec<AttributeSetSource>>;
    fn owned_tags(&self, subject: SubjectHandle) -> Option<Vec<String>>;
    fn blocked_tags(&self, subject: SubjectHandle) -> Option<Vec<String>>;
    fn probe_can_activate(&self, subject: SubjectHandle, ability: u64)
    -> Option<ActivationProbe>;
}
