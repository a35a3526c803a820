//! Snapshot builders: one per inspector domain.
//!
//! Each builder is a pure transformation from subject data to a tree of
//! records, re-run in full on every refresh. No incremental patching at
//! this layer; the change-detection cache downstream decides whether a
//! rebuilt snapshot actually gets published.

mod ability;
mod attribute;
mod effect;
mod tag;


pub use ability::build_ability_tree;
pub use attribute::build_attribute_tree;
pub use effect::{AttributeModifier, build_effect_tree, modifiers_for_attribute};
pub use tag::{build_tag_tree, sort_children};
