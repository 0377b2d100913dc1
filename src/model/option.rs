use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Entity selector meaning "every entity of the holder"
pub const WILDCARD: &str = "*";

macro_rules! option_value_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Spelling shared by JDL and the JSON documents
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!(
                        "invalid {} value '{}', expected one of: {}",
                        stringify!($name),
                        other,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

option_value_enum! {
    /// Value domain of the `dto` option
    DtoValue { Mapstruct => "mapstruct", No => "no" }
}

option_value_enum! {
    /// Value domain of the `service` option
    ServiceValue { ServiceClass => "serviceClass", ServiceImpl => "serviceImpl", No => "no" }
}

option_value_enum! {
    /// Value domain of the `paginate` option
    PaginationValue {
        Pagination => "pagination",
        InfiniteScroll => "infinite-scroll",
        Pager => "pager",
        No => "no",
    }
}

option_value_enum! {
    /// Value domain of the `search` option
    SearchEngineValue { Elasticsearch => "elasticsearch", Couchbase => "couchbase", No => "no" }
}

/// Every option the converter understands, with its typed value.
///
/// Unary options (`skipClient`, `filter`, ...) carry no value; binary options
/// carry a value from their own domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    SkipClient,
    SkipServer,
    NoFluentMethod,
    Filter,
    ReadOnly,
    Embedded,
    Dto(DtoValue),
    Service(ServiceValue),
    Pagination(PaginationValue),
    Search(SearchEngineValue),
    Microservice(String),
    AngularSuffix(String),
    ClientRootFolder(String),
}

impl OptionKind {
    /// JDL spelling of the option name
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::SkipClient => "skipClient",
            OptionKind::SkipServer => "skipServer",
            OptionKind::NoFluentMethod => "noFluentMethod",
            OptionKind::Filter => "filter",
            OptionKind::ReadOnly => "readOnly",
            OptionKind::Embedded => "embedded",
            OptionKind::Dto(_) => "dto",
            OptionKind::Service(_) => "service",
            OptionKind::Pagination(_) => "paginate",
            OptionKind::Search(_) => "search",
            OptionKind::Microservice(_) => "microservice",
            OptionKind::AngularSuffix(_) => "angularSuffix",
            OptionKind::ClientRootFolder(_) => "clientRootFolder",
        }
    }

    /// Value as written in JDL, `None` for unary options
    pub fn value(&self) -> Option<String> {
        match self {
            OptionKind::Dto(v) => Some(v.to_string()),
            OptionKind::Service(v) => Some(v.to_string()),
            OptionKind::Pagination(v) => Some(v.to_string()),
            OptionKind::Search(v) => Some(v.to_string()),
            OptionKind::Microservice(v) | OptionKind::AngularSuffix(v) | OptionKind::ClientRootFolder(v) => {
                Some(v.clone())
            }
            _ => None,
        }
    }

    fn parse(name: &str, value: Option<&str>) -> Result<Self, String> {
        let unary = |kind: OptionKind| match value {
            None => Ok(kind),
            Some(v) => Err(format!("option '{}' takes no value, got '{}'", name, v)),
        };
        let binary = || value.ok_or_else(|| format!("option '{}' requires a value", name));

        match name {
            "skipClient" => unary(OptionKind::SkipClient),
            "skipServer" => unary(OptionKind::SkipServer),
            "noFluentMethod" => unary(OptionKind::NoFluentMethod),
            "filter" => unary(OptionKind::Filter),
            "readOnly" => unary(OptionKind::ReadOnly),
            "embedded" => unary(OptionKind::Embedded),
            "dto" => Ok(OptionKind::Dto(binary()?.parse()?)),
            "service" => Ok(OptionKind::Service(binary()?.parse()?)),
            "paginate" | "pagination" => Ok(OptionKind::Pagination(binary()?.parse()?)),
            "search" => Ok(OptionKind::Search(binary()?.parse()?)),
            "microservice" => Ok(OptionKind::Microservice(binary()?.to_string())),
            "angularSuffix" => Ok(OptionKind::AngularSuffix(binary()?.to_string())),
            "clientRootFolder" => Ok(OptionKind::ClientRootFolder(binary()?.to_string())),
            other => Err(format!("unknown option '{}'", other)),
        }
    }
}

/// An option declaration together with the entities it targets
///
/// `entity_names` may contain [`WILDCARD`]; `excluded_names` lists entities
/// removed from the selection (`dto * with mapstruct except A, B`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawOption")]
pub struct JdlOption {
    pub kind: OptionKind,
    pub entity_names: Vec<String>,
    pub excluded_names: Vec<String>,
}

impl JdlOption {
    pub fn new(kind: OptionKind) -> Self {
        JdlOption {
            kind,
            entity_names: vec![WILDCARD.to_string()],
            excluded_names: Vec::new(),
        }
    }

    pub fn for_entities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn excluding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn targets_all(&self) -> bool {
        self.entity_names.iter().any(|n| n == WILDCARD)
    }

    /// Entities this option applies to, in holder order for wildcards and
    /// declaration order otherwise. Only names known to the holder are kept.
    pub fn resolve_entity_names(&self, known: &[String]) -> Vec<String> {
        let candidates: Vec<&String> = if self.targets_all() {
            known.iter().collect()
        } else {
            self.entity_names
                .iter()
                .filter(|name| known.contains(name))
                .collect()
        };
        let mut resolved: Vec<String> = Vec::with_capacity(candidates.len());
        for name in candidates {
            if !self.excluded_names.contains(name) && !resolved.contains(name) {
                resolved.push(name.clone());
            }
        }
        resolved
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOption {
    name: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default = "default_entity_names")]
    entity_names: Vec<String>,
    #[serde(default)]
    excluded_names: Vec<String>,
}

fn default_entity_names() -> Vec<String> {
    vec![WILDCARD.to_string()]
}

impl TryFrom<RawOption> for JdlOption {
    type Error = String;

    fn try_from(raw: RawOption) -> Result<Self, Self::Error> {
        Ok(JdlOption {
            kind: OptionKind::parse(&raw.name, raw.value.as_deref())?,
            entity_names: raw.entity_names,
            excluded_names: raw.excluded_names,
        })
    }
}

impl Serialize for JdlOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let value = self.kind.value();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.kind.name())?;
        if let Some(v) = &value {
            map.serialize_entry("value", v)?;
        }
        map.serialize_entry("entityNames", &self.entity_names)?;
        if !self.excluded_names.is_empty() {
            map.serialize_entry("excludedNames", &self.excluded_names)?;
        }
        map.end()
    }
}

/// Anything that owns options and the entity names they resolve against:
/// the JDL object itself (global options) or one of its applications.
pub trait OptionHolder {
    fn entity_names(&self) -> Vec<String>;
    fn options(&self) -> &[JdlOption];
}
