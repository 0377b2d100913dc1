use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::lower_first;
use crate::json::JsonRelationship;
use crate::model::{is_built_in_entity, InjectedField, JdlRelationship, RelationshipType};

/// Entity name to its JSON relationships, in relationship declaration order
pub type RelationshipMap = IndexMap<String, Vec<JsonRelationship>>;

/// Relationship options hoisted to a dedicated boolean key
const JPA_DERIVED_IDENTIFIER: &str = "jpaDerivedIdentifier";

/// How one side of a relationship ends up in the JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideState {
    /// The injected field was written in JDL
    Declared,
    /// Not written, but the mapping needs a mirror entry with a derived name
    Synthesized,
    /// No entry for this side
    Absent,
}

/// Which injected fields a relationship declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    Both,
    FromOnly,
    ToOnly,
}

impl Declaration {
    fn of(relationship: &JdlRelationship) -> Self {
        match (
            relationship.injected_field_in_from.is_some(),
            relationship.injected_field_in_to.is_some(),
        ) {
            (true, true) => Declaration::Both,
            (false, true) => Declaration::ToOnly,
            // Neither side written: JDL injects `lowerFirst(to)` into `from`
            _ => Declaration::FromOnly,
        }
    }
}

/// `(from side, to side)` for every relationship type and declaration.
///
/// To-many capable relationships get a synthesized mirror on their
/// collection side; singular sides without an injected field stay absent.
///
/// A one-to-one or many-to-many declared only on its `to` side yields a
/// single record, on `to`, with `ownerSide: false`. No record of that
/// relationship is the owner.
pub fn side_states(relationship_type: RelationshipType, declaration: Declaration) -> (SideState, SideState) {
    use Declaration::*;
    use RelationshipType::*;
    use SideState::*;

    match (relationship_type, declaration) {
        (_, Both) => (Declared, Declared),
        (OneToOne, FromOnly) => (Declared, Absent),
        (OneToOne, ToOnly) => (Absent, Declared),
        (OneToMany, FromOnly) => (Declared, Synthesized),
        (OneToMany, ToOnly) => (Synthesized, Declared),
        (ManyToOne, FromOnly) => (Declared, Absent),
        (ManyToOne, ToOnly) => (Synthesized, Declared),
        (ManyToMany, FromOnly) => (Declared, Absent),
        (ManyToMany, ToOnly) => (Absent, Declared),
    }
}

/// Materialize both sides of every relationship into per-entity records.
///
/// Only entities listed in `entity_names` (built-ins excepted) get a key, and
/// only once they receive a record. An empty relationship list or entity list
/// yields an empty map.
pub fn convert_relationships(relationships: &[JdlRelationship], entity_names: &[String]) -> RelationshipMap {
    let mut converted = RelationshipMap::new();
    if relationships.is_empty() || entity_names.is_empty() {
        return converted;
    }
    let accepts = |name: &str| !is_built_in_entity(name) && entity_names.iter().any(|n| n == name);

    for relationship in relationships {
        let sides = Sides::resolve(relationship);
        if sides.from_state != SideState::Absent && accepts(&relationship.from) {
            converted
                .entry(relationship.from.clone())
                .or_default()
                .push(sides.from_record(relationship));
        }
        if sides.to_state != SideState::Absent && accepts(&relationship.to) {
            converted
                .entry(relationship.to.clone())
                .or_default()
                .push(sides.to_record(relationship));
        }
    }
    converted
}

/// Names and states of both sides of one relationship
struct Sides {
    from_state: SideState,
    to_state: SideState,
    from: InjectedField,
    to: InjectedField,
}

impl Sides {
    fn resolve(relationship: &JdlRelationship) -> Self {
        let (from_state, to_state) = side_states(relationship.relationship_type, Declaration::of(relationship));
        Sides {
            from_state,
            to_state,
            from: injected_or_default(relationship.injected_field_in_from.as_deref(), &relationship.to),
            to: injected_or_default(relationship.injected_field_in_to.as_deref(), &relationship.from),
        }
    }

    fn from_record(&self, relationship: &JdlRelationship) -> JsonRelationship {
        let declared = self.from_state == SideState::Declared;
        let mut record = JsonRelationship {
            relationship_name: self.from.relationship_name.clone(),
            relationship_type: relationship.relationship_type,
            other_entity_name: lower_first(&relationship.to),
            other_entity_relationship_name: Some(self.to.relationship_name.clone()),
            other_entity_field: self.from.other_entity_field.clone(),
            owner_side: relationship.relationship_type.has_owner_side().then_some(true),
            relationship_validate_rules: (declared && relationship.is_injected_field_in_from_required)
                .then(|| "required".to_string()),
            javadoc: relationship.comment_in_from.clone().filter(|_| declared),
            options: None,
            use_jpa_derived_identifier: None,
        };
        attach_options(&mut record, relationship.options.for_source());
        record
    }

    fn to_record(&self, relationship: &JdlRelationship) -> JsonRelationship {
        let declared = self.to_state == SideState::Declared;
        let inverse = relationship.relationship_type.inverse();
        let mut record = JsonRelationship {
            relationship_name: self.to.relationship_name.clone(),
            relationship_type: inverse,
            other_entity_name: lower_first(&relationship.from),
            other_entity_relationship_name: Some(self.from.relationship_name.clone()),
            other_entity_field: self.to.other_entity_field.clone(),
            owner_side: inverse.has_owner_side().then_some(false),
            relationship_validate_rules: (declared && relationship.is_injected_field_in_to_required)
                .then(|| "required".to_string()),
            javadoc: relationship.comment_in_to.clone().filter(|_| declared),
            options: None,
            use_jpa_derived_identifier: None,
        };
        attach_options(&mut record, relationship.options.for_destination());
        record
    }
}

fn injected_or_default(raw: Option<&str>, other_entity: &str) -> InjectedField {
    match raw {
        Some(raw) => InjectedField::parse(raw),
        None => InjectedField {
            relationship_name: lower_first(other_entity),
            other_entity_field: None,
        },
    }
}

fn attach_options(record: &mut JsonRelationship, mut options: Map<String, Value>) {
    if let Some(value) = options.remove(JPA_DERIVED_IDENTIFIER) {
        if value.as_bool().unwrap_or(true) {
            record.use_jpa_derived_identifier = Some(true);
        }
    }
    if !options.is_empty() {
        record.options = Some(options);
    }
}
