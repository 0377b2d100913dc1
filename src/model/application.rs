use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::option::{JdlOption, OptionHolder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    #[default]
    Monolith,
    Microservice,
    Gateway,
    Uaa,
}

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Monolith => "monolith",
            ApplicationType::Microservice => "microservice",
            ApplicationType::Gateway => "gateway",
            ApplicationType::Uaa => "uaa",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monolith" => Ok(ApplicationType::Monolith),
            "microservice" => Ok(ApplicationType::Microservice),
            "gateway" => Ok(ApplicationType::Gateway),
            "uaa" => Ok(ApplicationType::Uaa),
            other => Err(format!("unknown application type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Sql,
    Mongodb,
    Cassandra,
    Couchbase,
    Neo4j,
    No,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Sql => "sql",
            DatabaseType::Mongodb => "mongodb",
            DatabaseType::Cassandra => "cassandra",
            DatabaseType::Couchbase => "couchbase",
            DatabaseType::Neo4j => "neo4j",
            DatabaseType::No => "no",
        }
    }

    /// JPA metamodel filtering needs a SQL database
    pub fn supports_filtering(&self) -> bool {
        matches!(self, DatabaseType::Sql)
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sql" => Ok(DatabaseType::Sql),
            "mongodb" => Ok(DatabaseType::Mongodb),
            "cassandra" => Ok(DatabaseType::Cassandra),
            "couchbase" => Ok(DatabaseType::Couchbase),
            "neo4j" => Ok(DatabaseType::Neo4j),
            "no" => Ok(DatabaseType::No),
            other => Err(format!("unknown database type '{}'", other)),
        }
    }
}

/// An `application { ... }` block of a JDL file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlApplication {
    pub base_name: String,
    #[serde(default)]
    pub application_type: ApplicationType,
    pub database_type: DatabaseType,
    /// Names listed in the `entities` clause, in declaration order
    #[serde(default)]
    pub entities: Vec<String>,
    /// Options declared inside the application block
    #[serde(default)]
    pub options: Vec<JdlOption>,
}

impl JdlApplication {
    pub fn new(base_name: impl Into<String>, application_type: ApplicationType, database_type: DatabaseType) -> Self {
        JdlApplication {
            base_name: base_name.into(),
            application_type,
            database_type,
            entities: Vec::new(),
            options: Vec::new(),
        }
    }

    pub fn with_entities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entities.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_option(mut self, option: JdlOption) -> Self {
        self.options.push(option);
        self
    }
}

impl OptionHolder for JdlApplication {
    fn entity_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.entities.len());
        for name in &self.entities {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    fn options(&self) -> &[JdlOption] {
        &self.options
    }
}
