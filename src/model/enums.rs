use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A JDL `enum` declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlEnum {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub values: Vec<JdlEnumValue>,
}

/// One entry of an enum, e.g. `FRENCH ("fr")` with an optional comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlEnumValue {
    pub key: String,
    /// Custom value written in parentheses after the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl JdlEnumValue {
    pub fn new(key: impl Into<String>) -> Self {
        JdlEnumValue {
            key: key.into(),
            value: None,
            comment: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl JdlEnum {
    pub fn new(name: impl Into<String>) -> Self {
        JdlEnum {
            name: name.into(),
            comment: None,
            values: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_value(mut self, value: JdlEnumValue) -> Self {
        self.values.push(value);
        self
    }

    /// Comma-joined values in declaration order, as expected by `fieldValues`.
    ///
    /// A value with a custom value renders as `KEY (value)`.
    pub fn values_as_string(&self) -> String {
        self.values
            .iter()
            .map(|v| match &v.value {
                Some(custom) => format!("{} ({})", v.key, custom),
                None => v.key.clone(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Comments of the commented values, keyed by value key
    pub fn value_javadocs(&self) -> IndexMap<String, String> {
        self.values
            .iter()
            .filter_map(|v| v.comment.as_ref().map(|c| (v.key.clone(), c.clone())))
            .collect()
    }
}
