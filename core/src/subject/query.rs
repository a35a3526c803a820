//! Stateless query facade over a [`SubjectSource`].
//!
//! Pure pass-through with one policy applied uniformly: a stale handle
//! is degraded to an empty result, never an error. No caching, no
//! identity tracking; every call reflects live state.

use super::{
    AbilitySource, ActivationProbe, AttributeSetSource, EffectSource, SubjectHandle, SubjectSource,
};

pub struct SubjectQuery<'a> {
    source: &'a dyn SubjectSource,
}

impl<'a> SubjectQuery<'a> {
    pub fn new(source: &'a dyn SubjectSource) -> Self {
        Self { source }
    }

    pub fn list_abilities(&self, subject: SubjectHandle) -> Vec<AbilitySource> {
        self.source.abilities(subject).unwrap_or_default()
    }

    pub fn list_active_effects(&self, subject: SubjectHandle) -> Vec<EffectSource> {
        self.source.active_effects(subject).unwrap_or_default()
    }

    pub fn list_attribute_sets(&self, subject: SubjectHandle) -> Vec<AttributeSetSource> {
        self.source.attribute_sets(subject).unwrap_or_default()
    }

    pub fn list_owned_tags(&self, subject: SubjectHandle) -> Vec<String> {
        self.source.owned_tags(subject).unwrap_or_default()
    }

    pub fn list_blocked_tags(&self, subject: SubjectHandle) -> Vec<String> {
        self.source.blocked_tags(subject).unwrap_or_default()
    }

    /// Probe activation. A stale handle reports a plain failed probe
    /// (not ok, no reason), matching the empty-result degradation of
    /// the list queries.
    pub fn probe_can_activate(&self, subject: SubjectHandle, ability: u64) -> ActivationProbe {
        self.source
            .probe_can_activate(subject, ability)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FakeSource, handle, make_ability};

    #[test]
    fn stale_handle_degrades_to_empty_results() {
        let source = FakeSource::default();
        let query = SubjectQuery::new(&source);
        let gone = handle(99);

        assert!(query.list_abilities(gone).is_empty());
        assert!(query.list_active_effects(gone).is_empty());
        assert!(query.list_attribute_sets(gone).is_empty());
        assert!(query.list_owned_tags(gone).is_empty());
        assert!(query.list_blocked_tags(gone).is_empty());
        assert!(!query.probe_can_activate(gone, 1).ok);
    }

    #[test]
    fn valid_handle_reflects_live_state() {
        let mut source = FakeSource::default();
        let subject = handle(0);
        source.subject_mut(subject).abilities = vec![make_ability(7, "GA_Dash")];
        source.subject_mut(subject).owned_tags = vec!["Movement.Dashing".to_string()];

        let query = SubjectQuery::new(&source);
        assert_eq!(query.list_abilities(subject).len(), 1);
        assert_eq!(query.list_owned_tags(subject), vec!["Movement.Dashing"]);

        // No caching: mutations are visible on the next call.
        source.subject_mut(subject).owned_tags.clear();
        let query = SubjectQuery::new(&source);
        assert!(query.list_owned_tags(subject).is_empty());
    }
}
