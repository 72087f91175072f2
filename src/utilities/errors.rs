//! Error types for strategy construction, context assembly, and the
//! strategy registry.
//!
//! All failures here are programmer errors surfaced at construction or
//! composition time: an invalid strategy or an empty context can never be
//! invoked, so evaluation itself stays infallible.

use thiserror::Error;

/// Errors raised while constructing a strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    /// A constructor parameter is outside its valid domain.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: String, message: String },
}

impl StrategyError {
    /// Shorthand for a [`StrategyError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        StrategyError::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while assembling or querying a context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContextError {
    /// A context was constructed with zero members.
    #[error("cannot assemble an empty {context}")]
    EmptyContext { context: &'static str },

    /// No role in a brigade declares the requested skill.
    #[error("no role supports `{skill}`")]
    NoCapableRole { skill: String },
}

/// Errors from the strategy registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No definition registered under the given id.
    #[error("unknown strategy definition: {id}")]
    UnknownStrategy { id: String },

    /// A definition with the given id is already registered.
    #[error("strategy definition already registered: {id}")]
    DuplicateStrategy { id: String },

    /// A definition resolved, but cannot be built in the requested domain.
    #[error("definition `{id}` is not usable here: {message}")]
    UnsupportedDefinition { id: String, message: String },

    /// A definition carried parameters a strategy constructor rejected.
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    /// A built set of strategies could not be assembled into a context.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// A definition file failed to parse.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// A definition file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = StrategyError::invalid_parameter("rate", "must lie in [0, 100], got 140");
        assert_eq!(
            err.to_string(),
            "invalid parameter `rate`: must lie in [0, 100], got 140"
        );
    }

    #[test]
    fn test_registry_error_wraps_strategy_error() {
        let err: RegistryError =
            StrategyError::invalid_parameter("amount", "must be finite").into();
        assert_eq!(err.to_string(), "invalid parameter `amount`: must be finite");
    }

    #[test]
    fn test_empty_context_message() {
        let err = ContextError::EmptyContext { context: "panel" };
        assert_eq!(err.to_string(), "cannot assemble an empty panel");
    }
}
