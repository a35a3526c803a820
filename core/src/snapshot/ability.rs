//! Ability tree builder.

use stateview_types::{AbilityRecord, TaskRecord};

use crate::classify::{AbilitySignals, classify};
use crate::subject::{SubjectHandle, SubjectQuery};

/// Build one record per granted ability, in source order (never
/// re-sorted; stability across refreshes lets the view keep expansion
/// state). Live tasks of active abilities become child records; task
/// labels reported for an inactive ability are stale and dropped.
pub fn build_ability_tree(query: &SubjectQuery, subject: SubjectHandle) -> Vec<AbilityRecord> {
    query
        .list_abilities(subject)
        .into_iter()
        .map(|src| {
            let probe = query.probe_can_activate(subject, src.id);
            let status = classify(&AbilitySignals::from_source(&src, probe));

            let tasks = if src.is_active {
                src.task_labels
                    .iter()
                    .map(|label| TaskRecord {
                        label: label.clone(),
                    })
                    .collect()
            } else {
                Vec::new()
            };

            AbilityRecord {
                id: src.id,
                type_name: src.type_name,
                level: src.level,
                active_count: src.active_count,
                input_id: src.input_id,
                status,
                cooldown_remaining: src.cooldown_remaining,
                cooldown_duration: src.cooldown_duration,
                tasks,
            }
        })
        .collect()
}
