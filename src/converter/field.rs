use indexmap::IndexMap;

use crate::error::ConversionError;
use crate::json::JsonField;
use crate::model::{is_built_in_entity, JdlField, JdlObject, JdlValidation, ValidationKind};

/// Entity name to its JSON fields, in field declaration order
pub type FieldMap = IndexMap<String, Vec<JsonField>>;

/// Render the fields of every (non built-in) entity of `jdl`.
///
/// Entities without fields still get an entry with an empty list.
pub fn convert_fields(jdl: Option<&JdlObject>) -> Result<FieldMap, ConversionError> {
    let jdl = jdl.ok_or_else(|| ConversionError::invalid_argument("A JDL Object must be passed to convert JDL fields to JSON."))?;

    let mut converted = FieldMap::with_capacity(jdl.entities.len());
    for entity in &jdl.entities {
        if is_built_in_entity(&entity.name) {
            continue;
        }
        let fields = entity.fields.iter().map(|f| convert_field(f, jdl)).collect();
        converted.insert(entity.name.clone(), fields);
    }
    Ok(converted)
}

fn convert_field(field: &JdlField, jdl: &JdlObject) -> JsonField {
    let mut json = JsonField {
        field_name: field.name.clone(),
        field_type: field.field_type.clone(),
        javadoc: field.comment.clone(),
        ..JsonField::default()
    };

    if let Some(blob) = field.blob_kind() {
        json.field_type = "byte[]".to_string();
        json.field_type_blob_content = Some(blob.content());
    } else if let Some(jdl_enum) = jdl.get_enum(&field.field_type) {
        json.field_values = Some(jdl_enum.values_as_string());
        json.field_type_javadoc = jdl_enum.comment.clone();
        let value_docs = jdl_enum.value_javadocs();
        if !value_docs.is_empty() {
            json.field_values_javadocs = Some(value_docs);
        }
    }

    if !field.options.is_empty() {
        json.options = Some(field.options.clone());
    }

    if !field.validations.is_empty() {
        json.field_validate_rules = Some(field.validations.iter().map(|v| v.name.as_str().to_string()).collect());
        for validation in &field.validations {
            set_validation_value(&mut json, validation);
        }
    }
    json
}

fn set_validation_value(json: &mut JsonField, validation: &JdlValidation) {
    let value = validation.value.clone();
    let slot = match validation.name {
        ValidationKind::Required | ValidationKind::Unique => return,
        ValidationKind::Min => &mut json.field_validate_rules_min,
        ValidationKind::Max => &mut json.field_validate_rules_max,
        ValidationKind::Minlength => &mut json.field_validate_rules_minlength,
        ValidationKind::Maxlength => &mut json.field_validate_rules_maxlength,
        ValidationKind::Pattern => &mut json.field_validate_rules_pattern,
        ValidationKind::Minbytes => &mut json.field_validate_rules_minbytes,
        ValidationKind::Maxbytes => &mut json.field_validate_rules_maxbytes,
    };
    *slot = value;
}
