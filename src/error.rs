use std::fmt;

/// Error returned by the converters
///
/// Only caller mistakes end up here. Data-quality problems in the JDL model
/// (built-in entity names, DTO without service, ...) are resolved by default
/// rules and reported through the [`ConversionLogger`](crate::logger::ConversionLogger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A mandatory parameter was not supplied
    ///
    /// Raised when a converter is called without its input (entities, JDL
    /// object, option holder) or when the legacy orchestrator misses its
    /// application name or database type.
    InvalidArgument {
        /// What was missing
        message: String,
    },
}

impl ConversionError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ConversionError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}
