use indexmap::IndexMap;
use std::collections::HashSet;

use crate::error::ConversionError;
use crate::json::{EntityOptions, SearchEngine};
use crate::logger::ConversionLogger;
use crate::model::{is_built_in_entity, DtoValue, JdlOption, OptionHolder, OptionKind, ServiceValue};

/// Entity name to the options resolved for it
pub type OptionMap = IndexMap<String, EntityOptions>;

/// Resolve every option of `holder` into per-entity values.
///
/// Options apply in declaration order, the last one of a kind wins for a
/// given entity. Afterwards an entity with `dto` or `filter` but no explicit
/// `service` gets `service: serviceClass` and one info message.
pub fn convert_options(
    holder: Option<&dyn OptionHolder>,
    logger: &dyn ConversionLogger,
) -> Result<OptionMap, ConversionError> {
    let holder = holder.ok_or_else(|| ConversionError::invalid_argument("A JDL object or application must be passed to convert JDL options to JSON."))?;
    let mut accumulator = OptionAccumulator::new();
    accumulator.apply_holder(holder);
    Ok(accumulator.finish(logger))
}

/// Per-entity option values collected across one or more holders
#[derive(Debug, Default)]
pub struct OptionAccumulator {
    resolved: OptionMap,
}

impl OptionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every option of `holder`, resolving wildcards against its entities
    pub fn apply_holder(&mut self, holder: &dyn OptionHolder) {
        let known: Vec<String> = holder
            .entity_names()
            .into_iter()
            .filter(|name| !is_built_in_entity(name))
            .collect();
        for option in holder.options() {
            self.apply(option, &known);
        }
    }

    fn apply(&mut self, option: &JdlOption, known: &[String]) {
        for name in option.resolve_entity_names(known) {
            set_option(self.entry(&name), &option.kind);
        }
        // `search * with engine except X` switches the engine off for X
        if let OptionKind::Search(_) = option.kind {
            for name in option.excluded_names.iter().filter(|n| known.contains(n)) {
                self.entry(name).search_engine = Some(SearchEngine::Disabled);
            }
        }
    }

    /// Drop every entity not listed in `names`.
    ///
    /// Global options reach all entities of the JDL object; an application
    /// keeps only its own before finishing.
    pub fn retain(&mut self, names: &[String]) {
        self.resolved.retain(|name, _| names.contains(name));
    }

    /// Options collected so far for `name`, before the service implication
    pub fn get(&self, name: &str) -> Option<&EntityOptions> {
        self.resolved.get(name)
    }

    fn entry(&mut self, name: &str) -> &mut EntityOptions {
        self.resolved.entry(name.to_string()).or_default()
    }

    /// Apply the service implication and hand out the resolved map
    pub fn finish(self, logger: &dyn ConversionLogger) -> OptionMap {
        self.finish_reporting(logger, &mut HashSet::new())
    }

    /// Like [`finish`](Self::finish), but entities already in `reported` are
    /// not logged again. Newly logged entities are added to it, so several
    /// applications sharing an entity produce one message.
    pub fn finish_reporting(mut self, logger: &dyn ConversionLogger, reported: &mut HashSet<String>) -> OptionMap {
        for (name, options) in self.resolved.iter_mut() {
            if options.service.is_some() {
                continue;
            }
            let trigger = if options.dto.is_some_and(|dto| dto != DtoValue::No) {
                "dto"
            } else if options.jpa_metamodel_filtering == Some(true) {
                "filter"
            } else {
                continue;
            };
            options.service = Some(ServiceValue::ServiceClass);
            if reported.insert(name.clone()) {
                logger.info(&format!(
                    "The {trigger} option is set for {name}, the 'serviceClass' value for the 'service' option is gonna be set for this entity if no other value has been set."
                ));
            }
        }
        self.resolved
    }
}

fn set_option(options: &mut EntityOptions, kind: &OptionKind) {
    match kind {
        OptionKind::SkipClient => options.skip_client = Some(true),
        OptionKind::SkipServer => options.skip_server = Some(true),
        OptionKind::NoFluentMethod => options.fluent_methods = Some(false),
        OptionKind::Filter => options.jpa_metamodel_filtering = Some(true),
        OptionKind::ReadOnly => options.read_only = Some(true),
        OptionKind::Embedded => options.embedded = Some(true),
        OptionKind::Dto(value) => options.dto = Some(*value),
        OptionKind::Service(value) => options.service = Some(*value),
        OptionKind::Pagination(value) => options.pagination = Some(*value),
        OptionKind::Search(value) => options.search_engine = Some(SearchEngine::Engine(*value)),
        OptionKind::Microservice(value) => options.microservice_name = Some(value.clone()),
        OptionKind::AngularSuffix(value) => options.angular_js_suffix = Some(value.clone()),
        OptionKind::ClientRootFolder(value) => options.client_root_folder = Some(value.clone()),
    }
}
