//! # Model Checker Module
//!
//! Reports data-quality problems of a JDL model before it is converted.
//! Conversion itself never fails on these; the checker is what the `check`
//! command runs and what `convert` consults to warn early.
//!
//! ## Checks Performed
//!
//! 1. **duplicate_entity** - Two entities share a name
//! 2. **built_in_entity** - `User` or `Authority` declared as an entity
//! 3. **unknown_field_type** - Field type is not a primitive, blob or declared enum
//! 4. **unknown_relationship_entity** - Relationship endpoint is not declared
//! 5. **unknown_option_entity** - Option names an entity that does not exist
//! 6. **unknown_application_entity** - Application lists an undeclared entity
//! 7. **pagination_with_cassandra** - Pagination in a Cassandra application
//!
//! ## Usage
//!
//! ```rust
//! use jdl_json::checker::{check_model, has_errors};
//! use jdl_json::model::{JdlEntity, JdlField, JdlObject};
//!
//! let jdl = JdlObject::new().with_entity(JdlEntity::new("Book").with_field(JdlField::new("title", "Strin")));
//! let issues = check_model(&jdl);
//! assert_eq!(issues[0].kind, "unknown_field_type");
//! assert!(has_errors(&issues));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::converter::OptionAccumulator;
use crate::model::{
    is_built_in_entity, load_model, BlobKind, DatabaseType, JdlObject, JdlOption, OptionHolder, PaginationValue,
    PRIMITIVE_FIELD_TYPES, WILDCARD,
};


/// Severity level for check issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckSeverity {
    /// The generated application would not build
    Error,
    /// Converted, but probably not what was meant
    Warning,
    Info,
}

impl fmt::Display for CheckSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckSeverity::Error => write!(f, "error"),
            CheckSeverity::Warning => write!(f, "warning"),
            CheckSeverity::Info => write!(f, "info"),
        }
    }
}

/// A problem found in a JDL model
#[derive(Debug, Clone)]
pub struct CheckIssue {
    /// Where the issue occurred (e.g., "entity:Book", "application:store")
    pub location: String,
    pub severity: CheckSeverity,
    /// Type of issue (e.g., "unknown_field_type")
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl CheckIssue {
    pub fn new(
        location: impl Into<String>,
        severity: CheckSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CheckIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Load a JDL model file and check it
pub fn check_model_file(model_path: &Path) -> anyhow::Result<Vec<CheckIssue>> {
    let jdl = load_model(model_path)?;
    Ok(check_model(&jdl))
}

/// Run every check against `jdl`, in the order listed in the module docs
pub fn check_model(jdl: &JdlObject) -> Vec<CheckIssue> {
    let mut issues = Vec::new();
    check_entities(jdl, &mut issues);
    check_relationships(jdl, &mut issues);
    check_options(jdl, &mut issues);
    check_applications(jdl, &mut issues);
    issues
}

fn check_entities(jdl: &JdlObject, issues: &mut Vec<CheckIssue>) {
    let mut seen = HashSet::new();
    for entity in &jdl.entities {
        let location = format!("entity:{}", entity.name);
        if !seen.insert(entity.name.as_str()) {
            issues.push(
                CheckIssue::new(
                    &location,
                    CheckSeverity::Error,
                    "duplicate_entity",
                    format!("Entity '{}' is declared more than once", entity.name),
                )
                .with_suggestion("Merge the declarations or rename one of them"),
            );
        }
        if is_built_in_entity(&entity.name) {
            issues.push(
                CheckIssue::new(
                    &location,
                    CheckSeverity::Warning,
                    "built_in_entity",
                    format!("'{}' is a built-in entity and will not be converted", entity.name),
                )
                .with_suggestion("Remove the declaration, relationships to it keep working"),
            );
        }
        for field in &entity.fields {
            if is_known_field_type(jdl, &field.field_type) {
                continue;
            }
            issues.push(
                CheckIssue::new(
                    format!("{}.{}", location, field.name),
                    CheckSeverity::Error,
                    "unknown_field_type",
                    format!("Field '{}' has unknown type '{}'", field.name, field.field_type),
                )
                .with_suggestion(format!(
                    "Use one of {} or declare an enum named '{}'",
                    PRIMITIVE_FIELD_TYPES.join(", "),
                    field.field_type
                )),
            );
        }
    }
}

fn is_known_field_type(jdl: &JdlObject, field_type: &str) -> bool {
    PRIMITIVE_FIELD_TYPES.contains(&field_type)
        || BlobKind::from_type_name(field_type).is_some()
        || jdl.has_enum(field_type)
}

fn check_relationships(jdl: &JdlObject, issues: &mut Vec<CheckIssue>) {
    for relationship in &jdl.relationships {
        let location = format!(
            "relationship:{}({})->{}",
            relationship.relationship_type, relationship.from, relationship.to
        );
        for endpoint in [&relationship.from, &relationship.to] {
            if jdl.has_entity(endpoint) || is_built_in_entity(endpoint) {
                continue;
            }
            issues.push(CheckIssue::new(
                &location,
                CheckSeverity::Error,
                "unknown_relationship_entity",
                format!("Relationship references undeclared entity '{}'", endpoint),
            ));
        }
    }
}

fn check_options(jdl: &JdlObject, issues: &mut Vec<CheckIssue>) {
    for option in &jdl.options {
        check_option_targets(jdl, option, "option", issues);
    }
    for application in &jdl.applications {
        let prefix = format!("application:{}/option", application.base_name);
        for option in &application.options {
            check_option_targets(jdl, option, &prefix, issues);
        }
    }
}

fn check_option_targets(jdl: &JdlObject, option: &JdlOption, prefix: &str, issues: &mut Vec<CheckIssue>) {
    let named = option.entity_names.iter().chain(option.excluded_names.iter());
    for name in named.filter(|n| n.as_str() != WILDCARD) {
        if jdl.has_entity(name) {
            continue;
        }
        issues.push(CheckIssue::new(
            format!("{}:{}", prefix, option.kind.name()),
            CheckSeverity::Warning,
            "unknown_option_entity",
            format!("Option '{}' names undeclared entity '{}'", option.kind.name(), name),
        ));
    }
}

fn check_applications(jdl: &JdlObject, issues: &mut Vec<CheckIssue>) {
    for application in &jdl.applications {
        let location = format!("application:{}", application.base_name);
        for name in &application.entities {
            if !jdl.has_entity(name) {
                issues.push(CheckIssue::new(
                    &location,
                    CheckSeverity::Error,
                    "unknown_application_entity",
                    format!("Application lists undeclared entity '{}'", name),
                ));
            }
        }

        if application.database_type != DatabaseType::Cassandra {
            continue;
        }
        let mut accumulator = OptionAccumulator::new();
        accumulator.apply_holder(jdl);
        accumulator.apply_holder(application);
        for name in application.entity_names() {
            let paginated = accumulator
                .get(&name)
                .and_then(|o| o.pagination)
                .is_some_and(|p| p != PaginationValue::No);
            if paginated {
                issues.push(
                    CheckIssue::new(
                        format!("{}/entity:{}", location, name),
                        CheckSeverity::Warning,
                        "pagination_with_cassandra",
                        format!("Pagination is set for '{}' but Cassandra applications cannot paginate", name),
                    )
                    .with_suggestion("Exclude the entity from the paginate option"),
                );
            }
        }
    }
}

/// Print issues grouped by severity
pub fn print_check_issues(issues: &[CheckIssue]) {
    if issues.is_empty() {
        println!("✅ No issues found!");
        return;
    }

    let errors: Vec<_> = issues.iter().filter(|i| i.severity == CheckSeverity::Error).collect();
    let warnings: Vec<_> = issues.iter().filter(|i| i.severity == CheckSeverity::Warning).collect();
    let infos: Vec<_> = issues.iter().filter(|i| i.severity == CheckSeverity::Info).collect();

    println!("\n📋 Check Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    print_group("❌ Errors (must fix):", &errors);
    print_group("⚠️  Warnings (should fix):", &warnings);
    print_group("ℹ️  Info:", &infos);
}

fn print_group(title: &str, issues: &[&CheckIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("{}", title);
    for issue in issues {
        println!("   [{}] {}", issue.kind, issue.location);
        println!("      {}", issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("      💡 Suggestion: {}", suggestion);
        }
    }
    println!();
}

/// Whether any issue is an error
pub fn has_errors(issues: &[CheckIssue]) -> bool {
    issues.iter().any(|i| i.severity == CheckSeverity::Error)
}
