//! Scope resolution for PSI MI elements
//!
//! A "scope" is the nearest enclosing entity that owns the property or
//! relationship currently being processed; the element immediately
//! outside it is the "context". The scope/context pair is the single
//! source of truth for implicit-versus-explicit classification.

/// Canonical entity scope names
pub const SCOPE_NAMES: [&str; 5] = [
    "entry",
    "interaction",
    "interactor",
    "participant",
    "experimentDescription",
];

/// Map a raw tag name to its canonical form.
///
/// PSI MI XML version 1.0 used dedicated protein element names; these
/// are tracked under the canonical scope names so all downstream
/// lookups stay uniform.
pub fn canonical_name(raw: &str) -> &str {
    match raw {
        "proteinInteractor" => "interactor",
        "proteinParticipant" => "participant",
        other => other,
    }
}

/// Whether `name` is a canonical scope name
pub fn is_scope(name: &str) -> bool {
    SCOPE_NAMES.contains(&name)
}

/// Resolve the owning scope and its enclosing context for a path.
///
/// Walks the path from the innermost element outward; the first scope
/// name found is the scope, and the next element further out is the
/// context. `(None, None)` when no scope encloses the path, and a
/// `None` context when the scope sits at the document root.
pub fn resolve_scope_and_context<'a>(path: &[&'a str]) -> (Option<&'a str>, Option<&'a str>) {
    let mut scope = None;
    for &part in path.iter().rev() {
        if scope.is_none() {
            if is_scope(part) {
                scope = Some(part);
            }
        } else {
            return (scope, Some(part));
        }
    }
    (scope, None)
}

/// Whether the element `name` under `parent` defines an implicit
/// (nested, not externally referenced) entity.
///
/// Participants are always implicit; interactors are implicit exactly
/// when defined inline within a participant.
pub fn is_implicit(name: &str, parent: Option<&str>) -> bool {
    name == "participant" || (name == "interactor" && parent == Some("participant"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name_aliases() {
        assert_eq!(canonical_name("proteinInteractor"), "interactor");
        assert_eq!(canonical_name("proteinParticipant"), "participant");
        assert_eq!(canonical_name("interaction"), "interaction");
        assert_eq!(canonical_name("experimentRef"), "experimentRef");
    }

    #[test]
    fn test_resolve_scope_and_context() {
        let path = [
            "entrySet",
            "entry",
            "interactionList",
            "interaction",
            "participantList",
            "participant",
            "interactor",
            "names",
            "shortLabel",
        ];
        assert_eq!(
            resolve_scope_and_context(&path),
            (Some("interactor"), Some("participant"))
        );
    }

    #[test]
    fn test_resolve_scope_without_context() {
        // Scope at the document root has no enclosing element
        assert_eq!(resolve_scope_and_context(&["entry"]), (Some("entry"), None));
    }

    #[test]
    fn test_resolve_no_scope() {
        assert_eq!(
            resolve_scope_and_context(&["entrySet", "availabilityList"]),
            (None, None)
        );
        assert_eq!(resolve_scope_and_context(&[]), (None, None));
    }

    #[test]
    fn test_is_implicit_classification() {
        // Participants are implicit regardless of parent
        assert!(is_implicit("participant", Some("participantList")));
        assert!(is_implicit("participant", None));

        // Interactors only when nested in a participant
        assert!(is_implicit("interactor", Some("participant")));
        assert!(!is_implicit("interactor", Some("interactorList")));
        assert!(!is_implicit("interactor", None));

        assert!(!is_implicit("interaction", Some("interactionList")));
        assert!(!is_implicit("experimentDescription", Some("interaction")));
    }
}
