//! Shared test fixtures.

use hashbrown::HashMap;
use stateview_types::PredictionState;

use crate::subject::{
    AbilitySource, ActivationProbe, AttributeSetSource, EffectSource, SubjectHandle, SubjectSource,
};

/// In-memory subject system. Handles without an entry behave as stale.
#[derive(Default)]
pub(crate) struct FakeSource {
    subjects: HashMap<SubjectHandle, SubjectState>,
}

#[derive(Default)]
pub(crate) struct SubjectState {
    pub abilities: Vec<AbilitySource>,
    pub effects: Vec<EffectSource>,
    pub attribute_sets: Vec<AttributeSetSource>,
    pub owned_tags: Vec<String>,
    pub blocked_tags: Vec<String>,
    /// Probe results keyed by ability id. Unkeyed abilities probe ok.
    pub probes: HashMap<u64, ActivationProbe>,
}

impl FakeSource {
    pub fn subject_mut(&mut self, subject: SubjectHandle) -> &mut SubjectState {
        self.subjects.entry(subject).or_default()
    }

    pub fn remove_subject(&mut self, subject: SubjectHandle) {
        self.subjects.remove(&subject);
    }
}

impl SubjectSource for FakeSource {
    fn abilities(&self, subject: SubjectHandle) -> Option<Vec<AbilitySource>> {
        self.subjects.get(&subject).map(|s| s.abilities.clone())
    }

    fn active_effects(&self, subject: SubjectHandle) -> Option<Vec<EffectSource>> {
        self.subjects.get(&subject).map(|s| s.effects.clone())
    }

    fn attribute_sets(&self, subject: SubjectHandle) -> Option<Vec<AttributeSetSource>> {
        self.subjects
            .get(&subject)
            .map(|s| s.attribute_sets.clone())
    }

    fn owned_tags(&self, subject: SubjectHandle) -> Option<Vec<String>> {
        self.subjects.get(&subject).map(|s| s.owned_tags.clone())
    }

    fn blocked_tags(&self, subject: SubjectHandle) -> Option<Vec<String>> {
        self.subjects.get(&subject).map(|s| s.blocked_tags.clone())
    }

    fn probe_can_activate(
        &self,
        subject: SubjectHandle,
        ability: u64,
    ) -> Option<ActivationProbe> {
        self.subjects
            .get(&subject)
            .map(|s| s.probes.get(&ability).cloned().unwrap_or_else(ActivationProbe::ok))
    }
}

pub(crate) fn handle(index: u32) -> SubjectHandle {
    SubjectHandle::new(index, 0)
}

pub(crate) fn make_ability(id: u64, type_name: &str) -> AbilitySource {
    AbilitySource {
        id,
        type_name: type_name.to_string(),
        level: 1,
        is_active: false,
        active_count: 0,
        input_id: None,
        input_blocked: false,
        tag_blocked: false,
        cooldown_remaining: 0.0,
        cooldown_duration: 0.0,
        task_labels: Vec::new(),
    }
}

pub(crate) fn make_effect(
    id: u64,
    type_name: &str,
    duration_secs: f32,
    time_remaining_secs: f32,
) -> EffectSource {
    EffectSource {
        id,
        type_name: type_name.to_string(),
        stack_count: 1,
        level: 1.0,
        duration_secs,
        time_remaining_secs,
        prediction: PredictionState::None,
        granted_tags: Vec::new(),
        modifier_defs: Vec::new(),
        evaluated_magnitudes: Vec::new(),
    }
}
