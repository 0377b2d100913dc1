use convert_case::{Case, Casing};

use super::EntityMap;
use crate::error::ConversionError;
use crate::json::JsonEntity;
use crate::logger::ConversionLogger;
use crate::model::{is_built_in_entity, JdlEntity};

/// Build one bare JSON record per entity: name, table name, javadoc and the
/// option defaults, with empty `fields` and `relationships`.
///
/// Built-in entities are skipped with a warning. Passing `None` is a caller
/// error; an empty slice yields an empty map.
pub fn convert_entities(
    entities: Option<&[JdlEntity]>,
    logger: &dyn ConversionLogger,
) -> Result<EntityMap, ConversionError> {
    let entities =
        entities.ok_or_else(|| ConversionError::invalid_argument("JDL entities must be passed to get the basic entity information."))?;

    let mut converted = EntityMap::with_capacity(entities.len());
    for entity in entities {
        if is_built_in_entity(&entity.name) {
            logger.warn(&format!(
                "An entity name '{}' was used but is a built-in entity of JHipster, it won't be converted.",
                entity.name
            ));
            continue;
        }
        converted.insert(entity.name.clone(), convert_entity(entity));
    }
    Ok(converted)
}

fn convert_entity(entity: &JdlEntity) -> JsonEntity {
    let table_name = entity
        .table_name
        .clone()
        .unwrap_or_else(|| entity.name.to_case(Case::Snake));
    let mut json = JsonEntity::new(entity.name.clone(), table_name);
    json.javadoc = entity.comment.clone();
    json
}
