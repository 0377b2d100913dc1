use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Cardinality of a JDL relationship, seen from its `from` entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RelationshipType {
    #[serde(alias = "one-to-one")]
    OneToOne,
    #[serde(alias = "one-to-many")]
    OneToMany,
    #[serde(alias = "many-to-one")]
    ManyToOne,
    #[serde(alias = "many-to-many")]
    ManyToMany,
}

impl RelationshipType {
    /// Kebab-case spelling used by the JSON documents
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::OneToOne => "one-to-one",
            RelationshipType::OneToMany => "one-to-many",
            RelationshipType::ManyToOne => "many-to-one",
            RelationshipType::ManyToMany => "many-to-many",
        }
    }

    /// The same relationship seen from the `to` entity
    pub fn inverse(self) -> Self {
        match self {
            RelationshipType::OneToMany => RelationshipType::ManyToOne,
            RelationshipType::ManyToOne => RelationshipType::OneToMany,
            other => other,
        }
    }

    /// One-to-one and many-to-many relationships have an explicit owner side
    pub fn has_owner_side(&self) -> bool {
        matches!(self, RelationshipType::OneToOne | RelationshipType::ManyToMany)
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RelationshipType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Options declared on a relationship with `@` annotations.
///
/// `global` options apply to both sides; `source` and `destination` only to
/// the `from` and `to` side respectively and win over `global` on conflict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipOptions {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub global: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub source: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub destination: Map<String, Value>,
}

impl RelationshipOptions {
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.source.is_empty() && self.destination.is_empty()
    }

    /// Options seen by the `from` side
    pub fn for_source(&self) -> Map<String, Value> {
        merged(&self.global, &self.source)
    }

    /// Options seen by the `to` side
    pub fn for_destination(&self) -> Map<String, Value> {
        merged(&self.global, &self.destination)
    }
}

fn merged(base: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut out = base.clone();
    for (k, v) in overrides {
        out.insert(k.clone(), v.clone());
    }
    out
}

/// A relationship between two entities, exactly as declared in JDL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlRelationship {
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    pub from: String,
    pub to: String,
    /// Field injected in `from`, optionally suffixed with `(otherEntityField)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injected_field_in_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injected_field_in_to: Option<String>,
    #[serde(default)]
    pub is_injected_field_in_from_required: bool,
    #[serde(default)]
    pub is_injected_field_in_to_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_in_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_in_to: Option<String>,
    #[serde(default, skip_serializing_if = "RelationshipOptions::is_empty")]
    pub options: RelationshipOptions,
}

impl JdlRelationship {
    pub fn new(relationship_type: RelationshipType, from: impl Into<String>, to: impl Into<String>) -> Self {
        JdlRelationship {
            relationship_type,
            from: from.into(),
            to: to.into(),
            injected_field_in_from: None,
            injected_field_in_to: None,
            is_injected_field_in_from_required: false,
            is_injected_field_in_to_required: false,
            comment_in_from: None,
            comment_in_to: None,
            options: RelationshipOptions::default(),
        }
    }

    pub fn with_injected_field_in_from(mut self, field: impl Into<String>) -> Self {
        self.injected_field_in_from = Some(field.into());
        self
    }

    pub fn with_injected_field_in_to(mut self, field: impl Into<String>) -> Self {
        self.injected_field_in_to = Some(field.into());
        self
    }

    pub fn required_in_from(mut self) -> Self {
        self.is_injected_field_in_from_required = true;
        self
    }

    pub fn required_in_to(mut self) -> Self {
        self.is_injected_field_in_to_required = true;
        self
    }

    pub fn with_comment_in_from(mut self, comment: impl Into<String>) -> Self {
        self.comment_in_from = Some(comment.into());
        self
    }

    pub fn with_comment_in_to(mut self, comment: impl Into<String>) -> Self {
        self.comment_in_to = Some(comment.into());
        self
    }

    pub fn with_options(mut self, options: RelationshipOptions) -> Self {
        self.options = options;
        self
    }
}

/// `name` or `name(otherEntityField)`
static INJECTED_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([^\s(]+)\s*(?:\(\s*([^\s)]+)\s*\))?\s*$")
        .expect("injected field regex should be valid")
});

/// An injected field split into its name and optional display field,
/// e.g. `owner(login)` becomes `owner` + `login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedField {
    pub relationship_name: String,
    pub other_entity_field: Option<String>,
}

impl InjectedField {
    pub fn parse(raw: &str) -> Self {
        if let Some(caps) = INJECTED_FIELD_REGEX.captures(raw) {
            return InjectedField {
                relationship_name: caps[1].to_string(),
                other_entity_field: caps.get(2).map(|m| m.as_str().to_string()),
            };
        }
        // Malformed suffix: keep everything before the parenthesis as the name
        let name = raw.split('(').next().unwrap_or(raw).trim();
        InjectedField {
            relationship_name: name.to_string(),
            other_entity_field: None,
        }
    }
}
