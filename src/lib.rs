//! # jdl-json
//!
//! **jdl-json** turns a parsed JDL model (entities, fields, enums,
//! relationships, options and applications) into the JSON entity documents
//! that JHipster-style scaffolding templates consume.
//!
//! ## Overview
//!
//! The JDL grammar is parsed elsewhere. This crate is the backend that
//! resolves relationship ownership, layers global and per-application options,
//! applies the implicit defaults (DTO or filter implies a service class) and
//! produces stable, order-preserving JSON records.
//!
//! ## Architecture
//!
//! - **[`model`]** - In-memory JDL model and its YAML/JSON loader
//! - **[`converter`]** - Entity, field, option and relationship converters plus
//!   the two orchestrators
//! - **[`json`]** - Output records, serialized with the exact key names templates expect
//! - **[`checker`]** - Data-quality report on a model
//! - **[`config`]** - `jdl-json.toml` parameters for models without applications
//! - **[`logger`]** - Logging capability injected into the converters
//! - **[`logging`]** - `tracing` subscriber setup for the binary
//! - **[`cli`]** - The `jdl-json` command line
//!
//! ### Conversion Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(jdl-json)
//!     participant Load as model::load_model
//!     participant Check as checker::check_model
//!     participant Conv as converter
//!     participant Out as stdout / file
//!
//!     CLI->>Load: load_model("model.yaml")
//!     Load-->>CLI: JdlObject
//!     CLI->>Check: check_model(&jdl)
//!     Check-->>CLI: Vec<CheckIssue> (logged)
//!     alt model declares applications
//!         CLI->>Conv: convert_entities_with_applications
//!     else legacy model
//!         CLI->>Conv: convert_entities_without_application
//!     end
//!     Conv->>Conv: convert_entities
//!     Conv->>Conv: convert_fields
//!     Conv->>Conv: convert_relationships
//!     Conv->>Conv: convert_options
//!     Conv-->>CLI: IndexMap<String, JsonEntity>
//!     CLI->>Out: serde_json
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use jdl_json::converter::{convert_entities_without_application, ConversionParameters};
//! use jdl_json::logger::RecordingLogger;
//! use jdl_json::model::{DatabaseType, DtoValue, JdlEntity, JdlObject, JdlOption, OptionKind};
//!
//! let jdl = JdlObject::new()
//!     .with_entity(JdlEntity::new("Book"))
//!     .with_option(JdlOption::new(OptionKind::Dto(DtoValue::Mapstruct)));
//! let parameters = ConversionParameters::new(&jdl)
//!     .application_name("library")
//!     .database_type(DatabaseType::Sql);
//! let logger = RecordingLogger::new();
//!
//! let entities = convert_entities_without_application(&parameters, &logger).unwrap();
//! let json = serde_json::to_value(&entities["Book"]).unwrap();
//! assert_eq!(json["service"], "serviceClass");
//! assert_eq!(logger.infos().len(), 1);
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod converter;
mod error;
pub mod json;
pub mod logger;
pub mod logging;
pub mod model;

pub use converter::{convert_entities_with_applications, convert_entities_without_application, ConversionParameters};
pub use error::ConversionError;
pub use json::JsonEntity;
pub use model::{load_model, JdlObject};
