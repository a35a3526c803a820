//! View-model record trees for the four inspector domains.
//!
//! Every record derives `PartialEq` on all leaf fields; structural
//! equality of a whole tree is the change-detection contract, so no
//! record may carry state that varies between value-identical rebuilds.
//! Trees are rebuilt in full on every refresh and owned exclusively by
//! the session that built them.

use serde::{Deserialize, Serialize};

use crate::status::{AbilityStatus, EffectDuration, PredictionState};

/// One granted ability, with live sub-tasks as children while active.
///
/// The `id` is the subject's spec handle: stable across refreshes unless
/// the ability was regranted, which lets a tree view preserve expansion
/// state between rebuilds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub id: u64,
    pub type_name: String,
    pub level: i32,
    pub active_count: u32,
    /// Input binding, if the ability activates on input.
    pub input_id: Option<i32>,
    pub status: AbilityStatus,
    pub cooldown_remaining: f32,
    pub cooldown_duration: f32,
    pub tasks: Vec<TaskRecord>,
}

/// A live sub-task of a running ability instance. Ephemeral: no identity
/// beyond its parent, re-derived on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub label: String,
}

/// One currently active effect with its modifiers as children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectRecord {
    pub id: u64,
    pub type_name: String,
    pub stack_count: u32,
    pub level: f32,
    pub duration: EffectDuration,
    pub time_remaining: EffectDuration,
    pub prediction: PredictionState,
    pub granted_tags: Vec<String>,
    pub modifiers: Vec<ModifierRecord>,
}

impl EffectRecord {
    /// Fraction of the duration still remaining, clamped to `0..=1`.
    /// `None` for permanent effects; callers must treat that as
    /// not-applicable rather than substituting a number.
    pub fn duration_progress(&self) -> Option<f32> {
        let duration = self.duration.seconds()?;
        let remaining = self.time_remaining.seconds()?;
        Some((remaining / duration).clamp(0.0, 1.0))
    }
}

/// How a modifier combines with its target attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierOp {
    Additive,
    Multiplicative,
    Division,
    Override,
}

/// One attribute-affecting operation defined within an effect.
/// Always a leaf, always a child of exactly one [`EffectRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierRecord {
    pub attribute: String,
    pub op: ModifierOp,
    /// Magnitude evaluated against the live effect spec.
    pub magnitude: f32,
}

/// Group node for one attribute-set type; leaves are the set's attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSetNode {
    pub set_name: String,
    pub attributes: Vec<AttributeRecord>,
}

/// A named numeric value with base and current (modified) values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub name: String,
    pub base_value: f32,
    pub current_value: f32,
}

impl AttributeRecord {
    /// Whether any modifier is currently affecting this attribute.
    pub fn is_modified(&self) -> bool {
        (self.current_value - self.base_value).abs() > 1.0e-4
    }

    /// Relative change from base, as a signed fraction. Zero when the
    /// base is near zero (a ratio against ~0 is meaningless).
    pub fn change_percent(&self) -> f32 {
        if self.base_value.abs() < 1.0e-4 {
            return 0.0;
        }
        (self.current_value - self.base_value) / self.base_value
    }
}

/// Node in a dotted-hierarchy tag tree.
///
/// Groups represent path prefixes (`Status`, `Status.Debuff`); leaves are
/// concrete tags. Two tags sharing a prefix share the same group node
/// within one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TagNode {
    Group {
        /// Last path segment of this group.
        segment: String,
        /// Dotted path from the root, empty for the root itself.
        full_path: String,
        children: Vec<TagNode>,
    },
    Leaf {
        /// The complete tag string.
        tag: String,
    },
}

impl TagNode {
    /// An empty tree root.
    pub fn root() -> Self {
        Self::Group {
            segment: String::new(),
            full_path: String::new(),
            children: Vec::new(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Display name: the group segment, or the last segment of a leaf tag.
    pub fn segment(&self) -> &str {
        match self {
            Self::Group { segment, .. } => segment,
            Self::Leaf { tag } => tag.rsplit('.').next().unwrap_or(tag),
        }
    }

    /// Full dotted path of this node.
    pub fn full_path(&self) -> &str {
        match self {
            Self::Group { full_path, .. } => full_path,
            Self::Leaf { tag } => tag,
        }
    }

    pub fn children(&self) -> &[TagNode] {
        match self {
            Self::Group { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Case-sensitive substring filter. A group matches if its own path
    /// or segment contains the filter, or any descendant matches, so
    /// filtering never hides the ancestors of a matching leaf.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        if self.full_path().contains(filter) || self.segment().contains(filter) {
            return true;
        }
        self.children().iter().any(|c| c.matches_filter(filter))
    }
}
