//! Effect tree builder.

use stateview_types::{EffectDuration, EffectRecord, ModifierOp, ModifierRecord};

use crate::subject::{EffectSource, SubjectHandle, SubjectQuery};

/// Build one record per currently active effect.
pub fn build_effect_tree(query: &SubjectQuery, subject: SubjectHandle) -> Vec<EffectRecord> {
    query
        .list_active_effects(subject)
        .into_iter()
        .map(build_record)
        .collect()
}

fn build_record(src: EffectSource) -> EffectRecord {
    // Modifier definitions and evaluated magnitudes correspond
    // positionally but are independently sized in a transient snapshot.
    // Build only the overlapping prefix; either list can be the longer one.
    let paired = src.modifier_defs.len().min(src.evaluated_magnitudes.len());
    if src.modifier_defs.len() != src.evaluated_magnitudes.len() {
        tracing::debug!(
            effect = %src.type_name,
            defs = src.modifier_defs.len(),
            magnitudes = src.evaluated_magnitudes.len(),
            "modifier/spec count mismatch, pairing overlapping prefix"
        );
    }

    let modifiers = src
        .modifier_defs
        .iter()
        .zip(src.evaluated_magnitudes.iter())
        .take(paired)
        .map(|(def, &magnitude)| ModifierRecord {
            attribute: def.attribute.clone(),
            op: def.op,
            magnitude,
        })
        .collect();

    let duration = EffectDuration::from_seconds(src.duration_secs);
    let time_remaining = match duration {
        EffectDuration::Infinite => EffectDuration::Infinite,
        EffectDuration::Seconds(_) => EffectDuration::Seconds(src.time_remaining_secs),
    };

    EffectRecord {
        id: src.id,
        type_name: src.type_name,
        stack_count: src.stack_count,
        level: src.level,
        duration,
        time_remaining,
        prediction: src.prediction,
        granted_tags: src.granted_tags,
        modifiers,
    }
}

/// One modifier hit on a specific attribute, with its source effect.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeModifier {
    pub source_effect: String,
    pub stack_count: u32,
    pub op: ModifierOp,
    pub magnitude: f32,
}

/// Collect every modifier targeting `attribute` across all active
/// effects, in effect order. Answers "what is changing this value?".
pub fn modifiers_for_attribute(effects: &[EffectRecord], attribute: &str) -> Vec<AttributeModifier> {
    let mut result = Vec::new();
    for effect in effects {
        for modifier in &effect.modifiers {
            if modifier.attribute == attribute {
                result.push(AttributeModifier {
                    source_effect: effect.type_name.clone(),
                    stack_count: effect.stack_count,
                    op: modifier.op,
                    magnitude: modifier.magnitude,
                });
            }
        }
    }
    result
}
