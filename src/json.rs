//! JSON entity documents produced by the converters.
//!
//! Key names and default values are consumed verbatim by the scaffolding
//! templates, so every struct here serializes in camelCase with the exact
//! spelling the templates pattern-match on (`angularJSSuffix`,
//! `useJPADerivedIdentifier`, ...). Optional keys are omitted when unset.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::model::{
    BlobContent, DtoValue, PaginationValue, RelationshipType, SearchEngineValue, ServiceValue,
};

/// The `searchEngine` value: an engine name, or `false` for entities excluded
/// from a wildcard `search` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Engine(SearchEngineValue),
    Disabled,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::Engine(SearchEngineValue::No)
    }
}

impl Serialize for SearchEngine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SearchEngine::Engine(value) => value.serialize(serializer),
            SearchEngine::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// Which applications an entity belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applications {
    /// `"*"`: the entity is generated wherever it is used
    All,
    Named(Vec<String>),
}

impl Serialize for Applications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Applications::All => serializer.serialize_str("*"),
            Applications::Named(names) => names.serialize(serializer),
        }
    }
}

/// One `.jhipster/<Entity>.json` document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonEntity {
    pub name: String,
    pub entity_table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,
    pub dto: DtoValue,
    pub pagination: PaginationValue,
    pub service: ServiceValue,
    pub search_engine: SearchEngine,
    pub embedded: bool,
    pub read_only: bool,
    pub skip_client: bool,
    pub skip_server: bool,
    pub fluent_methods: bool,
    pub jpa_metamodel_filtering: bool,
    #[serde(rename = "angularJSSuffix", skip_serializing_if = "Option::is_none")]
    pub angular_js_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_root_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microservice_name: Option<String>,
    pub fields: Vec<JsonField>,
    pub relationships: Vec<JsonRelationship>,
    pub applications: Applications,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog_date: Option<String>,
}

impl JsonEntity {
    /// A bare entity carrying only the defaults
    pub fn new(name: impl Into<String>, entity_table_name: impl Into<String>) -> Self {
        JsonEntity {
            name: name.into(),
            entity_table_name: entity_table_name.into(),
            javadoc: None,
            dto: DtoValue::No,
            pagination: PaginationValue::No,
            service: ServiceValue::No,
            search_engine: SearchEngine::default(),
            embedded: false,
            read_only: false,
            skip_client: false,
            skip_server: false,
            fluent_methods: true,
            jpa_metamodel_filtering: false,
            angular_js_suffix: None,
            client_root_folder: None,
            microservice_name: None,
            fields: Vec::new(),
            relationships: Vec::new(),
            applications: Applications::All,
            changelog_date: None,
        }
    }

    /// Overwrite every option present in `options`; absent ones keep their value
    pub fn apply_options(&mut self, options: &EntityOptions) {
        if let Some(v) = options.embedded {
            self.embedded = v;
        }
        if let Some(v) = options.jpa_metamodel_filtering {
            self.jpa_metamodel_filtering = v;
        }
        if let Some(v) = options.read_only {
            self.read_only = v;
        }
        if let Some(v) = options.skip_client {
            self.skip_client = v;
        }
        if let Some(v) = options.skip_server {
            self.skip_server = v;
        }
        if let Some(v) = options.fluent_methods {
            self.fluent_methods = v;
        }
        if let Some(v) = &options.angular_js_suffix {
            self.angular_js_suffix = Some(v.clone());
        }
        if let Some(v) = &options.client_root_folder {
            self.client_root_folder = Some(v.clone());
        }
        if let Some(v) = options.dto {
            self.dto = v;
        }
        if let Some(v) = &options.microservice_name {
            self.microservice_name = Some(v.clone());
        }
        if let Some(v) = options.pagination {
            self.pagination = v;
        }
        if let Some(v) = options.search_engine {
            self.search_engine = v;
        }
        if let Some(v) = options.service {
            self.service = v;
        }
    }
}

/// Flat option values resolved for one entity
///
/// `None` means "not set by any option", which matters for the service
/// inference rule: only an unset `service` gets defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpa_metamodel_filtering: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_client: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluent_methods: Option<bool>,
    #[serde(rename = "angularJSSuffix", skip_serializing_if = "Option::is_none")]
    pub angular_js_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_root_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dto: Option<DtoValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microservice_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_engine: Option<SearchEngine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceValue>,
}

/// One entry of an entity's `fields` array
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonField {
    pub field_name: String,
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type_blob_content: Option<BlobContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_values: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type_javadoc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_values_javadocs: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_validate_rules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_min: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_max: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_minlength: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_maxlength: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_pattern: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_minbytes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_maxbytes: Option<Value>,
}

/// One entry of an entity's `relationships` array
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRelationship {
    pub relationship_name: String,
    pub relationship_type: RelationshipType,
    pub other_entity_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_entity_relationship_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_entity_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_side: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_validate_rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
    #[serde(rename = "useJPADerivedIdentifier", skip_serializing_if = "Option::is_none")]
    pub use_jpa_derived_identifier: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_entity_serializes_defaults_in_order() {
        let entity = JsonEntity::new("Book", "book");
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Book",
                "entityTableName": "book",
                "dto": "no",
                "pagination": "no",
                "service": "no",
                "searchEngine": "no",
                "embedded": false,
                "readOnly": false,
                "skipClient": false,
                "skipServer": false,
                "fluentMethods": true,
                "jpaMetamodelFiltering": false,
                "fields": [],
                "relationships": [],
                "applications": "*"
            })
        );
        let text = serde_json::to_string(&entity).unwrap();
        assert!(text.starts_with(r#"{"name":"Book","entityTableName":"book","dto":"no""#));
    }

    #[test]
    fn test_apply_options_only_touches_set_values() {
        let mut entity = JsonEntity::new("Book", "book");
        entity.apply_options(&EntityOptions {
            pagination: Some(PaginationValue::InfiniteScroll),
            fluent_methods: Some(false),
            angular_js_suffix: Some("mySuffix".to_string()),
            search_engine: Some(SearchEngine::Disabled),
            ..EntityOptions::default()
        });
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["pagination"], "infinite-scroll");
        assert_eq!(json["fluentMethods"], false);
        assert_eq!(json["angularJSSuffix"], "mySuffix");
        assert_eq!(json["searchEngine"], false);
        assert_eq!(json["dto"], "no");
    }

    #[test]
    fn test_named_applications_serialize_as_list() {
        let mut entity = JsonEntity::new("Book", "book");
        entity.applications = Applications::Named(vec!["tata".into(), "tutu".into()]);
        entity.changelog_date = Some("20190101000000".into());
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["applications"], json!(["tata", "tutu"]));
        assert_eq!(json["changelogDate"], "20190101000000");
    }
}
