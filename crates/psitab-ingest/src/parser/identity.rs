//! Transient identifier assignment
//!
//! PSI MI XML 1.0 omits identifiers entirely, and some producers reuse
//! participant and inline-interactor identifiers across interactions
//! (seen in InnateDB exports). Entities affected by either problem get
//! a process-local monotonically increasing identifier instead of the
//! source-provided one.

use super::path::AttrMap;
use super::scope::is_implicit;

/// Entity kinds that carry identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Entry,
    Interaction,
    Interactor,
    Participant,
    ExperimentDescription,
}

impl EntityKind {
    /// Entity kind for a canonical element name, if it is one
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "entry" => Some(EntityKind::Entry),
            "interaction" => Some(EntityKind::Interaction),
            "interactor" => Some(EntityKind::Interactor),
            "participant" => Some(EntityKind::Participant),
            "experimentDescription" => Some(EntityKind::ExperimentDescription),
            _ => None,
        }
    }
}

/// Per-kind monotonic counters for transient identifiers.
///
/// Owned by one parser instance and never reset mid-run, so synthesized
/// identifiers stay distinct across every document of a batch.
#[derive(Debug, Default)]
pub struct IdentityAssigner {
    counters: [u64; 5],
}

impl IdentityAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next identifier for `kind`
    pub fn next(&mut self, kind: EntityKind) -> String {
        let counter = &mut self.counters[kind as usize];
        let id = counter.to_string();
        *counter += 1;
        id
    }

    /// Resolve the identifier for an element about to be opened.
    ///
    /// When the canonical `name` is a tracked entity kind and the source
    /// attributes lack an `id`, or the element is implicit under
    /// `parent`, a transient identifier overrides whatever the source
    /// provided. Must run before the element is pushed onto the path so
    /// every downstream lookup sees the resolved identifier.
    pub fn resolve(&mut self, name: &str, parent: Option<&str>, attrs: &mut AttrMap) {
        if let Some(kind) = EntityKind::from_name(name) {
            if !attrs.contains_key("id") || is_implicit(name, parent) {
                let id = self.next(kind);
                attrs.insert("id".to_string(), id);
            }
        }
    }
}
