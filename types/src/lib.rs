pub mod formatting;
mod records;
mod status;

pub use records::{
    AbilityRecord, AttributeRecord, AttributeSetNode, EffectRecord, ModifierOp, ModifierRecord,
    TagNode, TaskRecord,
};
pub use status::{AbilityStatus, EffectDuration, PredictionState};
