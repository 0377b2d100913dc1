//! # Model Module
//!
//! In-memory shape of a parsed JDL document: entities with their fields and
//! validations, enums, relationships, unary/binary options and applications.
//!
//! The JDL grammar lives elsewhere; this crate consumes the parser's output
//! either built in code (the `with_*` builders) or deserialized from a YAML or
//! JSON document with [`load_model`].
//!
//! ```rust
//! use jdl_json::model::{JdlEntity, JdlField, JdlObject, JdlOption, OptionKind, DtoValue};
//!
//! let jdl = JdlObject::new()
//!     .with_entity(JdlEntity::new("Book").with_field(JdlField::new("title", "String")))
//!     .with_option(JdlOption::new(OptionKind::Dto(DtoValue::Mapstruct)).for_entities(["Book"]));
//! assert!(jdl.has_entity("Book"));
//! ```

mod application;
mod entity;
mod enums;
mod load;
mod object;
mod option;
mod relationship;

pub use application::*;
pub use entity::*;
pub use enums::*;
pub use load::*;
pub use object::*;
pub use option::*;
pub use relationship::*;
