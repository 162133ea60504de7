//! Relationship and property record construction
//!
//! Runs once per completed element, while the element is still on the
//! path. Dedicated branches capture the experiment and interactor
//! relationships; everything else falls through to a fixed table of
//! recognized property elements. Anything unrecognized, or observed
//! outside a modeled scope, produces no record.

use super::path::PathTracker;
use super::scope;

/// Output relation a record is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Experiment,
    Interactor,
    Names,
    Xref,
    Organisms,
}

impl Relation {
    pub const ALL: [Relation; 5] = [
        Relation::Experiment,
        Relation::Interactor,
        Relation::Names,
        Relation::Xref,
        Relation::Organisms,
    ];

    /// Base name of the relation's output file
    pub fn file_stem(&self) -> &'static str {
        match self {
            Relation::Experiment => "experiment",
            Relation::Interactor => "interactor",
            Relation::Names => "names",
            Relation::Xref => "xref",
            Relation::Organisms => "organisms",
        }
    }
}

/// One fully constructed output row, minus the batch-level prefix.
///
/// `fields` holds everything after the entry identifier; absent values
/// stay `None` and are rendered as a placeholder by the sink. A record
/// is built whole or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub relation: Relation,
    pub entry: String,
    pub fields: Vec<Option<String>>,
}

/// Attribute keys extracted per recognized property element, in output
/// column order. `None` entries are fixed absent columns so rows of one
/// relation keep the same shape across element kinds.
const PROPERTY_KEYS: [(&str, &[Option<&str>]); 6] = [
    // references: property, reftype, id, dblabel, dbcode, reftypelabel, reftypecode
    (
        "primaryRef",
        &[
            Some("property"),
            Some("element"),
            Some("id"),
            Some("db"),
            Some("dbAc"),
            Some("refType"),
            Some("refTypeAc"),
        ],
    ),
    (
        "secondaryRef",
        &[
            Some("property"),
            Some("element"),
            Some("id"),
            Some("db"),
            Some("dbAc"),
            Some("refType"),
            Some("refTypeAc"),
        ],
    ),
    // names: property, nametype, label, code, value
    (
        "shortLabel",
        &[Some("property"), Some("element"), None, None, Some("content")],
    ),
    (
        "fullName",
        &[Some("property"), Some("element"), None, None, Some("content")],
    ),
    (
        "alias",
        &[
            Some("property"),
            Some("element"),
            Some("type"),
            Some("typeAc"),
            Some("content"),
        ],
    ),
    // organisms: taxid
    ("hostOrganism", &[Some("ncbiTaxId")]),
];

fn property_keys(element: &str) -> Option<&'static [Option<&'static str>]> {
    PROPERTY_KEYS
        .iter()
        .find(|(name, _)| *name == element)
        .map(|(_, keys)| *keys)
}

/// The structural parent of a property element selects its relation;
/// several distinct elements share a relation table this way.
fn relation_for_parent(parent: &str) -> Option<Relation> {
    match parent {
        "names" => Some(Relation::Names),
        "xref" => Some(Relation::Xref),
        "hostOrganismList" => Some(Relation::Organisms),
        _ => None,
    }
}

fn id_of(path: &PathTracker, name: &str) -> Option<String> {
    path.attributes_of(name).ok()?.get("id").cloned()
}

/// Build the record, if any, for the element that just closed.
///
/// The closed element must still be innermost on the path, so its own
/// attributes and the full enclosing context are visible. Returns
/// `None` for anything that should be silently discarded: elements
/// outside an entry, unknown elements, and records whose required
/// enclosing entities are not open.
pub fn extract(path: &PathTracker, content: &str) -> Option<Record> {
    // Nothing is emitted outside an entry
    let entry = id_of(path, "entry")?;

    let names = path.names();
    let (element, attrs) = path.innermost()?;

    let mut outward = names.iter().rev().skip(1);
    let parent = outward.next().copied();
    let property = outward.next().copied();
    let section = outward.next().copied();

    match element {
        // Experiment-to-interaction mappings. The "ref" attribute is the
        // PSI MI XML 1.0 form.
        "experimentRef" if parent == Some("experimentList") => {
            let interaction = id_of(path, "interaction")?;
            let reference = if content.is_empty() {
                attrs.get("ref").cloned()
            } else {
                Some(content.to_string())
            };
            Some(Record {
                relation: Relation::Experiment,
                entry,
                fields: vec![reference, Some(interaction)],
            })
        },

        // Explicit interactor-to-participant-to-interaction mappings
        "interactorRef" if parent == Some("participant") => {
            let participant = id_of(path, "participant")?;
            let interaction = id_of(path, "interaction")?;
            let reference = if content.is_empty() {
                attrs.get("ref").cloned()
            } else {
                Some(content.to_string())
            };
            Some(Record {
                relation: Relation::Interactor,
                entry,
                fields: vec![
                    reference,
                    Some("explicit".to_string()),
                    Some(participant),
                    Some(interaction),
                ],
            })
        },

        // Implicit interactor mappings, applying only within participants
        "interactor" if parent == Some("participant") => {
            let participant = id_of(path, "participant")?;
            let interaction = id_of(path, "interaction")?;
            Some(Record {
                relation: Relation::Interactor,
                entry,
                fields: vec![
                    attrs.get("id").cloned(),
                    Some("implicit".to_string()),
                    Some(participant),
                    Some(interaction),
                ],
            })
        },

        // Implicit experiment mappings within an interaction scope
        "experimentDescription" if path.is_open("interaction") => {
            let interaction = id_of(path, "interaction")?;
            Some(Record {
                relation: Relation::Experiment,
                entry,
                fields: vec![attrs.get("id").cloned(), Some(interaction)],
            })
        },

        // Interactor organisms
        "organism" if parent == Some("interactor") => {
            let interactor = id_of(path, "interactor")?;
            let implicit = if scope::is_implicit("interactor", property) {
                "implicit"
            } else {
                "explicit"
            };
            Some(Record {
                relation: Relation::Organisms,
                entry,
                fields: vec![
                    Some("interactor".to_string()),
                    Some(interactor),
                    Some(implicit.to_string()),
                    attrs.get("ncbiTaxId").cloned(),
                ],
            })
        },

        // Generic properties, of the form section/property/parent/element,
        // e.g. interactorList/interactor/xref/primaryRef
        _ => {
            let keys = property_keys(element)?;

            // Exclude occurrences already captured by the dedicated
            // branches above; they do not define entities here.
            if property == Some("interactor")
                && !matches!(section, Some("participant") | Some("interactorList"))
            {
                return None;
            }
            if property == Some("participant") && section != Some("participantList") {
                return None;
            }

            // Insist on a scope; entry-level properties are not modeled
            let (scope_name, context) = scope::resolve_scope_and_context(&names);
            let scope_name = scope_name?;
            if scope_name == "entry" {
                return None;
            }
            let scope_id = id_of(path, scope_name)?;

            let relation = relation_for_parent(parent?)?;

            let implicit = if scope::is_implicit(scope_name, context) {
                "implicit"
            } else {
                "explicit"
            };

            let mut fields = vec![
                Some(scope_name.to_string()),
                Some(scope_id),
                Some(implicit.to_string()),
            ];
            for key in keys {
                let value = match key {
                    Some("content") if !content.is_empty() => Some(content.to_string()),
                    Some("property") => property.map(str::to_string),
                    Some("element") => Some(element.to_string()),
                    Some(key) => attrs.get(*key).cloned(),
                    None => None,
                };
                fields.push(value);
            }

            Some(Record {
                relation,
                entry,
                fields,
            })
        },
    }
}
