//! Per-domain change detection.
//!
//! Each snapshot domain keeps its last published value and compares the
//! next build against it by value equality. Routing logic lives in the
//! session; this is pure storage.

/// Whether a freshly published snapshot differed from the cached one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeState {
    Changed,
    Unchanged,
}

impl ChangeState {
    pub fn is_changed(self) -> bool {
        matches!(self, ChangeState::Changed)
    }
}

/// Last published snapshot for one domain.
///
/// An empty cache (no publish since construction or [`reset`]) always
/// reports the first publish as changed, even when the new value is
/// empty itself. That keeps a subject switch from silently showing the
/// previous subject's data.
///
/// [`reset`]: DomainCache::reset
#[derive(Debug, Clone)]
pub struct DomainCache<T> {
    baseline: Option<T>,
}

impl<T> Default for DomainCache<T> {
    fn default() -> Self {
        Self { baseline: None }
    }
}

impl<T: PartialEq> DomainCache<T> {
    /// Compare `next` against the baseline, store it, and report
    /// whether it differed.
    pub fn publish(&mut self, next: T) -> ChangeState {
        let changed = match &self.baseline {
            Some(current) => *current != next,
            None => true,
        };
        self.baseline = Some(next);
        if changed {
            ChangeState::Changed
        } else {
            ChangeState::Unchanged
        }
    }

    /// Drop the baseline so the next publish reports changed.
    pub fn reset(&mut self) {
        self.baseline = None;
    }

    pub fn current(&self) -> Option<&T> {
        self.baseline.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_publish_is_always_changed() {
        let mut cache = DomainCache::default();
        assert_eq!(cache.publish(Vec::<u32>::new()), ChangeState::Changed);
    }

    #[test]
    fn equal_value_republish_is_unchanged() {
        let mut cache = DomainCache::default();
        cache.publish(vec![1, 2, 3]);
        assert_eq!(cache.publish(vec![1, 2, 3]), ChangeState::Unchanged);
        assert_eq!(cache.publish(vec![1, 2, 4]), ChangeState::Changed);
    }

    #[test]
    fn reset_forces_next_publish_changed() {
        let mut cache = DomainCache::default();
        cache.publish(vec![1]);
        cache.reset();
        assert!(cache.current().is_none());
        assert_eq!(cache.publish(vec![1]), ChangeState::Changed);
    }
}
