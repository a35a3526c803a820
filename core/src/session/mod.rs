//! One inspection session: a selected subject, its cached snapshots,
//! and subscribers notified when a refresh lands.
//!
//! Sessions are passive. Nothing here polls or owns the subject system;
//! the embedding layer decides when to call [`Session::request_refresh`]
//! (every frame, on a timer, or on demand) and hands in the source for
//! exactly that call. Event delivery is synchronous, on the caller's
//! stack, before the triggering call returns.

pub mod cache;


use stateview_types::{AbilityRecord, AttributeSetNode, EffectRecord, TagNode};

use crate::config::InspectorConfig;
use crate::snapshot::{
    build_ability_tree, build_attribute_tree, build_effect_tree, build_tag_tree, sort_children,
};
use crate::subject::{SubjectHandle, SubjectQuery, SubjectSource};

pub use cache::{ChangeState, DomainCache};

/// Which tag collection to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagScope {
    Owned,
    Blocked,
}

/// Per-domain change report for one completed refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub abilities: ChangeState,
    pub effects: ChangeState,
    pub attributes: ChangeState,
    pub owned_tags: ChangeState,
    pub blocked_tags: ChangeState,
}

impl RefreshOutcome {
    pub fn any_changed(&self) -> bool {
        self.abilities.is_changed()
            || self.effects.is_changed()
            || self.attributes.is_changed()
            || self.owned_tags.is_changed()
            || self.blocked_tags.is_changed()
    }
}

/// Signals emitted by a session for its subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// The selected subject changed. `None` means deselected.
    SelectionChanged { subject: Option<SubjectHandle> },
    /// A refresh completed, whether or not anything changed.
    RefreshCompleted { outcome: RefreshOutcome },
}

type Subscriber = Box<dyn FnMut(&SessionEvent)>;

static EMPTY_TAG_TREE: TagNode = TagNode::Group {
    segment: String::new(),
    full_path: String::new(),
    children: Vec::new(),
};

pub struct Session {
    subject: Option<SubjectHandle>,
    polling: bool,
    sort_tags: bool,
    abilities: DomainCache<Vec<AbilityRecord>>,
    effects: DomainCache<Vec<EffectRecord>>,
    attributes: DomainCache<Vec<AttributeSetNode>>,
    owned_tags: DomainCache<TagNode>,
    blocked_tags: DomainCache<TagNode>,
    subscribers: Vec<Subscriber>,
}

impl Session {
    pub fn new(config: &InspectorConfig) -> Self {
        Self {
            subject: None,
            polling: config.poll_on_open,
            sort_tags: config.sort_tags,
            abilities: DomainCache::default(),
            effects: DomainCache::default(),
            attributes: DomainCache::default(),
            owned_tags: DomainCache::default(),
            blocked_tags: DomainCache::default(),
            subscribers: Vec::new(),
        }
    }

    // ─── Selection ───────────────────────────────────────────────────

    pub fn selected_subject(&self) -> Option<SubjectHandle> {
        self.subject
    }

    /// Select a subject (or deselect with `None`). All caches are
    /// dropped so the next refresh reports every domain changed even if
    /// the new subject's state happens to equal the old one's.
    /// Re-selecting the current subject is a no-op and emits nothing.
    pub fn select_subject(&mut self, subject: Option<SubjectHandle>) {
        if self.subject == subject {
            return;
        }
        tracing::debug!(?subject, "subject selection changed");

        self.subject = subject;
        self.abilities.reset();
        self.effects.reset();
        self.attributes.reset();
        self.owned_tags.reset();
        self.blocked_tags.reset();

        self.emit(SessionEvent::SelectionChanged { subject });
    }

    // ─── Polling ─────────────────────────────────────────────────────

    pub fn polling_enabled(&self) -> bool {
        self.polling
    }

    /// Record whether the embedding layer intends to refresh this
    /// session continuously. Purely advisory; no timer runs here.
    pub fn set_polling_enabled(&mut self, enabled: bool) {
        self.polling = enabled;
    }

    // ─── Refresh ─────────────────────────────────────────────────────

    /// Rebuild all five snapshot domains from `source` and publish each
    /// against its cache. With no subject selected the domains rebuild
    /// from empty inputs; a stale handle degrades the same way through
    /// the query facade. Emits [`SessionEvent::RefreshCompleted`]
    /// exactly once, changed or not.
    pub fn request_refresh(&mut self, source: &dyn SubjectSource) -> RefreshOutcome {
        let query = SubjectQuery::new(source);

        let (abilities, effects, attributes, mut owned, mut blocked) = match self.subject {
            Some(subject) => (
                build_ability_tree(&query, subject),
                build_effect_tree(&query, subject),
                build_attribute_tree(&query, subject),
                build_tag_tree(&query.list_owned_tags(subject)),
                build_tag_tree(&query.list_blocked_tags(subject)),
            ),
            None => (
                Vec::new(),
                Vec::new(),
                Vec::new(),
                TagNode::root(),
                TagNode::root(),
            ),
        };

        if self.sort_tags {
            sort_children(&mut owned);
            sort_children(&mut blocked);
        }

        let outcome = RefreshOutcome {
            abilities: self.abilities.publish(abilities),
            effects: self.effects.publish(effects),
            attributes: self.attributes.publish(attributes),
            owned_tags: self.owned_tags.publish(owned),
            blocked_tags: self.blocked_tags.publish(blocked),
        };

        if outcome.any_changed() {
            tracing::debug!(?outcome, "refresh published changes");
        }
        self.emit(SessionEvent::RefreshCompleted { outcome });
        outcome
    }

    // ─── Snapshot access ─────────────────────────────────────────────

    pub fn ability_tree(&self) -> &[AbilityRecord] {
        self.abilities.current().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn effect_tree(&self) -> &[EffectRecord] {
        self.effects.current().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn attribute_tree(&self) -> &[AttributeSetNode] {
        self.attributes.current().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Root of the requested tag tree. An empty root before the first
    /// refresh, never an error.
    pub fn tag_tree(&self, scope: TagScope) -> &TagNode {
        let cache = match scope {
            TagScope::Owned => &self.owned_tags,
            TagScope::Blocked => &self.blocked_tags,
        };
        cache.current().unwrap_or(&EMPTY_TAG_TREE)
    }

    // ─── Subscriptions ───────────────────────────────────────────────

    /// Subscribe to every session event. Callbacks run synchronously on
    /// the emitting call's stack and must not call back into the
    /// session.
    pub fn subscribe(&mut self, callback: impl FnMut(&SessionEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn on_selection_changed(&mut self, mut callback: impl FnMut(Option<SubjectHandle>) + 'static) {
        self.subscribe(move |event| {
            if let SessionEvent::SelectionChanged { subject } = event {
                callback(*subject);
            }
        });
    }

    pub fn on_refresh_completed(&mut self, mut callback: impl FnMut(RefreshOutcome) + 'static) {
        self.subscribe(move |event| {
            if let SessionEvent::RefreshCompleted { outcome } = event {
                callback(*outcome);
            }
        });
    }

    fn emit(&mut self, event: SessionEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}
