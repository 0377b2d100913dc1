use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entities JHipster creates on its own. Declaring one in JDL does not
/// produce a JSON document, but relationships toward it are kept.
pub const BUILT_IN_ENTITIES: [&str; 2] = ["User", "Authority"];

/// Whether `name` is one of the [`BUILT_IN_ENTITIES`]
pub fn is_built_in_entity(name: &str) -> bool {
    BUILT_IN_ENTITIES.contains(&name)
}

/// An entity as produced by the JDL parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlEntity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub fields: Vec<JdlField>,
}

impl JdlEntity {
    pub fn new(name: impl Into<String>) -> Self {
        JdlEntity {
            name: name.into(),
            table_name: None,
            comment: None,
            fields: Vec::new(),
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_field(mut self, field: JdlField) -> Self {
        self.fields.push(field);
        self
    }
}

/// A field declared inside an entity body
///
/// `field_type` is the raw JDL type name: a primitive (`String`, `Integer`,
/// `Instant`, ...), a blob keyword (see [`BlobKind`]) or the name of an enum
/// declared in the same JDL object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub validations: Vec<JdlValidation>,
    /// Free-form annotations, passed through to the JSON record untouched
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl JdlField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        JdlField {
            name: name.into(),
            field_type: field_type.into(),
            comment: None,
            validations: Vec::new(),
            options: Map::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_validation(mut self, validation: JdlValidation) -> Self {
        self.validations.push(validation);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// The blob kind of this field, if its type is one of the blob keywords
    pub fn blob_kind(&self) -> Option<BlobKind> {
        BlobKind::from_type_name(&self.field_type)
    }
}

/// Field types the JDL grammar knows without an enum declaration
pub const PRIMITIVE_FIELD_TYPES: [&str; 14] = [
    "String",
    "Integer",
    "Long",
    "BigDecimal",
    "Float",
    "Double",
    "Boolean",
    "LocalDate",
    "ZonedDateTime",
    "Instant",
    "Duration",
    "UUID",
    "LocalTime",
    "byte[]",
];

/// The four blob keywords of JDL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobKind {
    Blob,
    AnyBlob,
    ImageBlob,
    TextBlob,
}

impl BlobKind {
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        match type_name {
            "Blob" => Some(BlobKind::Blob),
            "AnyBlob" => Some(BlobKind::AnyBlob),
            "ImageBlob" => Some(BlobKind::ImageBlob),
            "TextBlob" => Some(BlobKind::TextBlob),
            _ => None,
        }
    }

    /// Value of `fieldTypeBlobContent` for this blob kind
    pub fn content(self) -> BlobContent {
        match self {
            BlobKind::Blob | BlobKind::AnyBlob => BlobContent::Any,
            BlobKind::ImageBlob => BlobContent::Image,
            BlobKind::TextBlob => BlobContent::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobContent {
    Any,
    Image,
    Text,
}

/// A single validation attached to a field
///
/// `required` and `unique` carry no value; the other kinds carry a number,
/// except `pattern` which carries a regular expression string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdlValidation {
    pub name: ValidationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl JdlValidation {
    pub fn flag(name: ValidationKind) -> Self {
        JdlValidation { name, value: None }
    }

    pub fn with_value(name: ValidationKind, value: impl Into<Value>) -> Self {
        JdlValidation {
            name,
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    Required,
    Unique,
    Min,
    Max,
    Minlength,
    Maxlength,
    Pattern,
    Minbytes,
    Maxbytes,
}

impl ValidationKind {
    /// Rule name as written into `fieldValidateRules`
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::Required => "required",
            ValidationKind::Unique => "unique",
            ValidationKind::Min => "min",
            ValidationKind::Max => "max",
            ValidationKind::Minlength => "minlength",
            ValidationKind::Maxlength => "maxlength",
            ValidationKind::Pattern => "pattern",
            ValidationKind::Minbytes => "minbytes",
            ValidationKind::Maxbytes => "maxbytes",
        }
    }

    /// `required` and `unique` are flags; every other rule has a value
    pub fn takes_value(&self) -> bool {
        !matches!(self, ValidationKind::Required | ValidationKind::Unique)
    }
}

impl std::fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
