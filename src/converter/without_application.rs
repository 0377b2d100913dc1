use chrono::{DateTime, Duration, Utc};

use super::with_applications::apply_application_defaults;
use super::{convert_entities, convert_fields, convert_options, convert_relationships, EntityMap};
use crate::error::ConversionError;
use crate::json::Applications;
use crate::logger::ConversionLogger;
use crate::model::{ApplicationType, DatabaseType, JdlObject, OptionHolder};

/// Liquibase changelog timestamp, `20190101093000`
pub const CHANGELOG_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Inputs of the legacy, single-application conversion
///
/// `creation_timestamp` seeds the changelog dates. It is never read from the
/// clock here, so the same parameters always produce the same output.
#[derive(Debug, Clone, Default)]
pub struct ConversionParameters<'a> {
    pub jdl: Option<&'a JdlObject>,
    pub application_name: Option<&'a str>,
    /// Defaults to `monolith`
    pub application_type: Option<ApplicationType>,
    pub database_type: Option<DatabaseType>,
    pub creation_timestamp: DateTime<Utc>,
}

impl<'a> ConversionParameters<'a> {
    pub fn new(jdl: &'a JdlObject) -> Self {
        ConversionParameters {
            jdl: Some(jdl),
            ..Self::default()
        }
    }

    pub fn application_name(mut self, name: &'a str) -> Self {
        self.application_name = Some(name);
        self
    }

    pub fn application_type(mut self, application_type: ApplicationType) -> Self {
        self.application_type = Some(application_type);
        self
    }

    pub fn database_type(mut self, database_type: DatabaseType) -> Self {
        self.database_type = Some(database_type);
        self
    }

    pub fn creation_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.creation_timestamp = timestamp;
        self
    }
}

/// Convert every entity of a JDL object that declares no application.
///
/// Entities get `applications: "*"` and a `changelogDate` one second apart,
/// in declaration order, starting at the creation timestamp.
pub fn convert_entities_without_application(
    parameters: &ConversionParameters<'_>,
    logger: &dyn ConversionLogger,
) -> Result<EntityMap, ConversionError> {
    let (jdl, application_name, database_type) =
        match (parameters.jdl, parameters.application_name, parameters.database_type) {
            (Some(jdl), Some(name), Some(database_type)) if !name.is_empty() => (jdl, name, database_type),
            _ => {
                return Err(ConversionError::invalid_argument(
                    "The JDL object, the application's name and its database type are mandatory.",
                ))
            }
        };
    let application_type = parameters.application_type.unwrap_or_default();

    let mut entities = convert_entities(Some(&jdl.entities), logger)?;
    let mut fields = convert_fields(Some(jdl))?;
    let mut relationships = convert_relationships(&jdl.relationships, &jdl.entity_names());
    let options = convert_options(Some(jdl), logger)?;

    for (index, (name, entity)) in entities.iter_mut().enumerate() {
        entity.fields = fields.swap_remove(name).unwrap_or_default();
        entity.relationships = relationships.swap_remove(name).unwrap_or_default();
        if let Some(entity_options) = options.get(name) {
            entity.apply_options(entity_options);
        }
        entity.applications = Applications::All;
        apply_application_defaults(entity, application_name, application_type);
        if entity.jpa_metamodel_filtering && !database_type.supports_filtering() {
            logger.warn(&format!(
                "Filtering is set for {} but the {} database is used, filtering only works with SQL databases.",
                name, database_type
            ));
        }
        entity.changelog_date = Some(changelog_date(parameters.creation_timestamp, index));
    }
    Ok(entities)
}

/// The creation timestamp shifted by `offset` seconds
pub fn changelog_date(creation_timestamp: DateTime<Utc>, offset: usize) -> String {
    let shifted = i64::try_from(offset)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|delta| creation_timestamp.checked_add_signed(delta))
        .unwrap_or(creation_timestamp);
    shifted.format(CHANGELOG_DATE_FORMAT).to_string()
}
