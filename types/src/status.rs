use serde::{Deserialize, Serialize};

/// Discrete state of one granted ability, derived from several live
/// signals by the classifier. Exactly one state applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityStatus {
    /// Currently running. Dominates every blocking condition.
    Active,
    /// Could be activated right now.
    Ready,
    /// Activation probe failed and a cooldown is the cause.
    Cooldown,
    /// Input for this ability's binding is blocked.
    InputBlocked,
    /// The ability's tags conflict with currently blocked tags.
    TagBlocked,
    /// Activation probe failed for some reason other than cooldown
    /// (missing cost resource, custom activation check, ...).
    CantActivate,
}

impl AbilityStatus {
    /// Whether this state represents any kind of blocked activation.
    pub fn is_blocked(self) -> bool {
        matches!(
            self,
            Self::InputBlocked | Self::TagBlocked | Self::CantActivate
        )
    }
}

/// Effect duration, with an explicit sentinel for permanent effects.
///
/// A subject reports `duration <= 0` for effects that never expire; those
/// must never participate in ordering or progress math, so the sentinel is
/// a variant rather than a magic numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectDuration {
    Seconds(f32),
    Infinite,
}

impl EffectDuration {
    /// Map a raw duration from the subject; `<= 0` means permanent.
    pub fn from_seconds(secs: f32) -> Self {
        if secs > 0.0 {
            Self::Seconds(secs)
        } else {
            Self::Infinite
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    pub fn seconds(self) -> Option<f32> {
        match self {
            Self::Seconds(s) => Some(s),
            Self::Infinite => None,
        }
    }
}

/// Network prediction state of an active effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PredictionState {
    /// Applied authoritatively, no prediction involved.
    #[default]
    None,
    /// Locally predicted, still waiting for server confirmation.
    PredictedWaiting,
    /// Predicted locally and since confirmed.
    PredictedCaughtUp,
}
