use indexmap::IndexMap;
use std::collections::HashSet;

use super::{convert_entities, convert_fields, convert_relationships, EntityMap, FieldMap, OptionAccumulator};
use crate::error::ConversionError;
use crate::json::{Applications, JsonEntity};
use crate::logger::ConversionLogger;
use crate::model::{is_built_in_entity, ApplicationType, JdlApplication, JdlObject, OptionHolder};

/// Application base name to the entities converted for it
pub type ApplicationEntityMap = IndexMap<String, EntityMap>;

/// Convert the entities of every application declared in `jdl`.
///
/// Each application gets the entities it lists, in its own order, with the
/// global options overridden by the application's options. An entity shared
/// by several applications carries all of their names in `applications`.
pub fn convert_entities_with_applications(
    jdl: Option<&JdlObject>,
    logger: &dyn ConversionLogger,
) -> Result<ApplicationEntityMap, ConversionError> {
    let jdl = jdl.ok_or_else(|| ConversionError::invalid_argument("A JDL object must be passed to convert JDL to JSON."))?;

    let entities = convert_entities(Some(&jdl.entities), logger)?;
    let fields = convert_fields(Some(jdl))?;
    let memberships = application_memberships(jdl);

    // the service implication is reported once per entity, whatever the number of applications
    let mut reported = HashSet::new();
    let mut converted = ApplicationEntityMap::with_capacity(jdl.applications.len());
    for application in &jdl.applications {
        let application_entities =
            convert_application(jdl, application, &entities, &fields, &memberships, &mut reported, logger);
        converted.insert(application.base_name.clone(), application_entities);
    }
    Ok(converted)
}

fn convert_application(
    jdl: &JdlObject,
    application: &JdlApplication,
    entities: &EntityMap,
    fields: &FieldMap,
    memberships: &IndexMap<String, Vec<String>>,
    reported: &mut HashSet<String>,
    logger: &dyn ConversionLogger,
) -> EntityMap {
    let names = application_entity_names(jdl, application);
    let relationships = convert_relationships(&jdl.relationships, &names);
    let mut accumulator = OptionAccumulator::new();
    accumulator.apply_holder(jdl);
    accumulator.apply_holder(application);
    accumulator.retain(&names);
    let options = accumulator.finish_reporting(logger, reported);

    let mut converted = EntityMap::with_capacity(names.len());
    for name in &names {
        let Some(base) = entities.get(name) else {
            continue;
        };
        let mut entity = base.clone();
        entity.fields = fields.get(name).cloned().unwrap_or_default();
        entity.relationships = relationships.get(name).cloned().unwrap_or_default();
        if let Some(entity_options) = options.get(name) {
            entity.apply_options(entity_options);
        }
        entity.applications = Applications::Named(memberships.get(name).cloned().unwrap_or_default());
        apply_application_defaults(&mut entity, &application.base_name, application.application_type);
        if entity.jpa_metamodel_filtering && !application.database_type.supports_filtering() {
            logger.warn(&format!(
                "Filtering is set for {} but the application {} uses the {} database, filtering only works with SQL databases.",
                name, application.base_name, application.database_type
            ));
        }
        converted.insert(name.clone(), entity);
    }
    converted
}

/// Entities an application converts: declared in the JDL object, not built-in
fn application_entity_names(jdl: &JdlObject, application: &JdlApplication) -> Vec<String> {
    application
        .entity_names()
        .into_iter()
        .filter(|name| !is_built_in_entity(name) && jdl.has_entity(name))
        .collect()
}

/// Entity name to the names of the applications using it, in application order
fn application_memberships(jdl: &JdlObject) -> IndexMap<String, Vec<String>> {
    let mut memberships: IndexMap<String, Vec<String>> = IndexMap::new();
    for application in &jdl.applications {
        for name in application_entity_names(jdl, application) {
            memberships.entry(name).or_default().push(application.base_name.clone());
        }
    }
    memberships
}

/// Defaults that depend on the application the entity is generated in
pub(crate) fn apply_application_defaults(entity: &mut JsonEntity, base_name: &str, application_type: ApplicationType) {
    if application_type == ApplicationType::Microservice && entity.microservice_name.is_none() {
        entity.microservice_name = Some(base_name.to_string());
    }
}
