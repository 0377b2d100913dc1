use serde::{Deserialize, Serialize};

use super::application::JdlApplication;
use super::entity::JdlEntity;
use super::enums::JdlEnum;
use super::option::{JdlOption, OptionHolder};
use super::relationship::JdlRelationship;

/// Everything the JDL parser produced for a set of JDL files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlObject {
    #[serde(default)]
    pub entities: Vec<JdlEntity>,
    #[serde(default)]
    pub enums: Vec<JdlEnum>,
    #[serde(default)]
    pub relationships: Vec<JdlRelationship>,
    /// Options declared outside of any application block
    #[serde(default)]
    pub options: Vec<JdlOption>,
    #[serde(default)]
    pub applications: Vec<JdlApplication>,
}

impl JdlObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, entity: JdlEntity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn with_enum(mut self, jdl_enum: JdlEnum) -> Self {
        self.enums.push(jdl_enum);
        self
    }

    pub fn with_relationship(mut self, relationship: JdlRelationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn with_option(mut self, option: JdlOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_application(mut self, application: JdlApplication) -> Self {
        self.applications.push(application);
        self
    }

    pub fn entity(&self, name: &str) -> Option<&JdlEntity> {
        self.entities.iter().find(|e| e.name == name)
    }

    pub fn has_entity(&self, name: &str) -> bool {
        self.entity(name).is_some()
    }

    pub fn get_enum(&self, name: &str) -> Option<&JdlEnum> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn has_enum(&self, name: &str) -> bool {
        self.get_enum(name).is_some()
    }

    pub fn application(&self, base_name: &str) -> Option<&JdlApplication> {
        self.applications.iter().find(|a| a.base_name == base_name)
    }
}

impl OptionHolder for JdlObject {
    fn entity_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.entities.len());
        for entity in &self.entities {
            if !names.contains(&entity.name) {
                names.push(entity.name.clone());
            }
        }
        names
    }

    fn options(&self) -> &[JdlOption] {
        &self.options
    }
}
