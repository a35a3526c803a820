//! Ability state classification.
//!
//! Derives a single discrete [`AbilityStatus`] from several
//! independent, possibly conflicting live signals. The precedence
//! order is fixed and is itself the contract: activity dominates every
//! blocking condition (a running ability is never "blocked"), and
//! cooldown is reported only when it is the actual cause of an
//! activation failure. A probe failing for another reason (missing
//! cost resource, custom check) must not be mislabeled as cooldown.

use stateview_types::AbilityStatus;

use crate::subject::{AbilitySource, ActivationProbe};

/// Classifier inputs for one ability.
#[derive(Debug, Clone, PartialEq)]
pub struct AbilitySignals {
    pub is_active: bool,
    pub active_count: u32,
    pub input_blocked: bool,
    pub tag_blocked: bool,
    pub probe: ActivationProbe,
    pub cooldown_remaining: f32,
}

impl AbilitySignals {
    pub fn from_source(src: &AbilitySource, probe: ActivationProbe) -> Self {
        Self {
            is_active: src.is_active,
            active_count: src.active_count,
            input_blocked: src.input_blocked,
            tag_blocked: src.tag_blocked,
            probe,
            cooldown_remaining: src.cooldown_remaining,
        }
    }
}

/// Classify one ability. Checked in fixed order, first match wins:
/// Active, InputBlocked, TagBlocked, probe failure (Cooldown when a
/// cooldown remains, else CantActivate), Ready.
pub fn classify(signals: &AbilitySignals) -> AbilityStatus {
    if signals.is_active {
        return AbilityStatus::Active;
    }
    if signals.input_blocked {
        return AbilityStatus::InputBlocked;
    }
    if signals.tag_blocked {
        return AbilityStatus::TagBlocked;
    }
    if !signals.probe.ok {
        if signals.cooldown_remaining > 0.0 {
            return AbilityStatus::Cooldown;
        }
        return AbilityStatus::CantActivate;
    }
    AbilityStatus::Ready
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> AbilitySignals {
        AbilitySignals {
            is_active: false,
            active_count: 0,
            input_blocked: false,
            tag_blocked: false,
            probe: ActivationProbe::ok(),
            cooldown_remaining: 0.0,
        }
    }

    #[test]
    fn active_dominates_all_blocking() {
        let mut s = signals();
        s.is_active = true;
        s.active_count = 1;
        s.input_blocked = true;
        s.tag_blocked = true;
        s.probe = ActivationProbe::failed("cooldown");
        s.cooldown_remaining = 5.0;
        assert_eq!(classify(&s), AbilityStatus::Active);
    }

    #[test]
    fn input_block_beats_tag_block() {
        let mut s = signals();
        s.input_blocked = true;
        s.tag_blocked = true;
        assert_eq!(classify(&s), AbilityStatus::InputBlocked);
    }

    #[test]
    fn tag_block_beats_probe_failure() {
        let mut s = signals();
        s.tag_blocked = true;
        s.probe = ActivationProbe::failed("cost");
        assert_eq!(classify(&s), AbilityStatus::TagBlocked);
    }

    #[test]
    fn probe_failure_with_cooldown_is_cooldown() {
        let mut s = signals();
        s.probe = ActivationProbe::failed("cooldown active");
        s.cooldown_remaining = 5.0;
        assert_eq!(classify(&s), AbilityStatus::Cooldown);
    }

    #[test]
    fn probe_failure_without_cooldown_is_cant_activate() {
        let mut s = signals();
        s.probe = ActivationProbe::failed("not enough mana");
        s.cooldown_remaining = 0.0;
        assert_eq!(classify(&s), AbilityStatus::CantActivate);
    }

    #[test]
    fn cooldown_alone_does_not_block_a_passing_probe() {
        // A cooldown value only matters as the explanation of a failed
        // probe; if the subject says the ability can activate, it's Ready.
        let mut s = signals();
        s.cooldown_remaining = 3.0;
        assert_eq!(classify(&s), AbilityStatus::Ready);
    }

    #[test]
    fn unblocked_passing_probe_is_ready() {
        assert_eq!(classify(&signals()), AbilityStatus::Ready);
    }
}
