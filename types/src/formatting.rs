//! Centralized display formatting for inspector rows.
//!
//! All status/duration/stack text goes through this module so every
//! panel renders the same strings and tests can assert against one
//! source of truth.

use crate::status::{AbilityStatus, EffectDuration, PredictionState};

/// Format an ability status for the state column.
///
/// Active abilities show their instance count, cooldowns show whole
/// seconds rounded up (a cooldown of 0.2s still reads "Cooldown (1s)").
///
/// # Examples
/// ```
/// use stateview_types::{AbilityStatus, formatting::status_text};
/// assert_eq!(status_text(AbilityStatus::Active, 2, 0.0), "Active (2)");
/// assert_eq!(status_text(AbilityStatus::Cooldown, 0, 4.2), "Cooldown (5s)");
/// assert_eq!(status_text(AbilityStatus::Ready, 0, 0.0), "Ready");
/// ```
pub fn status_text(status: AbilityStatus, active_count: u32, cooldown_remaining: f32) -> String {
    match status {
        AbilityStatus::Active => format!("Active ({active_count})"),
        AbilityStatus::Ready => "Ready".to_string(),
        AbilityStatus::Cooldown => format!("Cooldown ({}s)", cooldown_remaining.ceil() as i64),
        AbilityStatus::InputBlocked => "Input Blocked".to_string(),
        AbilityStatus::TagBlocked => "Tag Blocked".to_string(),
        AbilityStatus::CantActivate => "Blocked".to_string(),
    }
}

/// Format an effect's duration column.
///
/// # Examples
/// ```
/// use stateview_types::{EffectDuration, formatting::duration_text};
/// let d = EffectDuration::Seconds(10.0);
/// let r = EffectDuration::Seconds(4.0);
/// assert_eq!(duration_text(d, r), "Duration: 10.00, Remaining: 4.00");
/// assert_eq!(
///     duration_text(EffectDuration::Infinite, EffectDuration::Infinite),
///     "Infinite Duration"
/// );
/// ```
pub fn duration_text(duration: EffectDuration, time_remaining: EffectDuration) -> String {
    match (duration.seconds(), time_remaining.seconds()) {
        (Some(d), Some(r)) => format!("Duration: {d:.2}, Remaining: {r:.2}"),
        _ => "Infinite Duration".to_string(),
    }
}

/// Format the stack column. Single stacks render as empty text so
/// unstacked effects don't show a redundant "Stacks: 1".
pub fn stack_text(stack_count: u32) -> String {
    if stack_count > 1 {
        format!("Stacks: {stack_count}")
    } else {
        String::new()
    }
}

/// Format the prediction column.
pub fn prediction_text(prediction: PredictionState) -> &'static str {
    match prediction {
        PredictionState::None => "",
        PredictionState::PredictedWaiting => "Predicted and Waiting",
        PredictionState::PredictedCaughtUp => "Predicted and Caught Up",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_rounds_up_to_whole_seconds() {
        assert_eq!(status_text(AbilityStatus::Cooldown, 0, 0.2), "Cooldown (1s)");
        assert_eq!(status_text(AbilityStatus::Cooldown, 0, 5.0), "Cooldown (5s)");
    }

    #[test]
    fn blocked_states_render_distinctly() {
        assert_eq!(
            status_text(AbilityStatus::InputBlocked, 0, 0.0),
            "Input Blocked"
        );
        assert_eq!(status_text(AbilityStatus::TagBlocked, 0, 0.0), "Tag Blocked");
        assert_eq!(status_text(AbilityStatus::CantActivate, 0, 0.0), "Blocked");
    }

    #[test]
    fn single_stack_is_empty() {
        assert_eq!(stack_text(1), "");
        assert_eq!(stack_text(0), "");
        assert_eq!(stack_text(3), "Stacks: 3");
    }
}
