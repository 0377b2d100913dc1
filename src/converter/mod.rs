//! # Converter Module
//!
//! Pure functions turning a [`JdlObject`](crate::model::JdlObject) into the
//! JSON entity documents of [`crate::json`].
//!
//! ## Pipeline
//!
//! ```text
//! JdlObject → entities → fields → relationships → options → orchestrator → JSON
//! ```
//!
//! 1. [`convert_entities`] builds bare records with defaults, dropping built-in entities
//! 2. [`convert_fields`] renders fields, enum values and validations
//! 3. [`convert_relationships`] materializes both sides of every relationship
//! 4. [`convert_options`] resolves unary/binary options and the service implication
//! 5. [`convert_entities_with_applications`] or [`convert_entities_without_application`]
//!    assembles the final maps
//!
//! Every converter receives its logger explicitly and keeps no state between
//! calls. Output maps are [`IndexMap`]s so entity order equals processing order.

mod entity;
mod field;
mod option;
mod relationship;
mod with_applications;
mod without_application;


pub use entity::*;
pub use field::*;
pub use option::*;
pub use relationship::*;
pub use with_applications::*;
pub use without_application::*;

use indexmap::IndexMap;

use crate::json::JsonEntity;

/// Entity name to JSON entity document, in processing order
pub type EntityMap = IndexMap<String, JsonEntity>;

/// `Book` → `book`, `BankAccount` → `bankAccount`
pub(crate) fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
