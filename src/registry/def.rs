//! Strategy definition — the declarative unit of registry-importable
//! behavior.
//!
//! A definition names a strategy by a namespaced id and carries the
//! immutable parameters a domain factory needs to construct it. Definitions
//! are loaded from YAML files in a `strategies/` directory or registered
//! programmatically, and resolved by the [`StrategyRegistry`].
//!
//! [`StrategyRegistry`]: super::StrategyRegistry

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A declarative strategy description.
///
/// Example YAML:
/// ```yaml
/// strategy:
///   id: "pricing:percentage"
///   description: "Seasonal percentage discount"
///   tags: ["discount", "seasonal"]
///   params:
///     rate: 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDef {
    /// Namespaced identifier: "namespace:name" (e.g., "pricing:percentage").
    pub id: String,

    /// Human-readable description of what this strategy does.
    #[serde(default)]
    pub description: String,

    /// Searchable tags for discovery.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Constructor parameters for the domain factory.
    #[serde(default)]
    pub params: HashMap<String, Value>,
}

impl StrategyDef {
    /// Create a definition with the given id and no parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            tags: Vec::new(),
            params: HashMap::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a searchable tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a constructor parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Parse a definition from a YAML string (nested under a `strategy:` key).
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let wrapper: StrategyDefWrapper = serde_yaml::from_str(yaml)?;
        Ok(wrapper.strategy)
    }

    /// Get the namespace from the id (e.g., "pricing" from "pricing:percentage").
    pub fn namespace(&self) -> &str {
        self.id.split(':').next().unwrap_or(&self.id)
    }

    /// Get the short name from the id (e.g., "percentage" from "pricing:percentage").
    pub fn short_name(&self) -> &str {
        self.id.split(':').nth(1).unwrap_or(&self.id)
    }

    /// Whether the definition carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Look up a numeric parameter.
    pub fn param_f64(&self, key: &str) -> Option<f64> {
        self.params.get(key).and_then(Value::as_f64)
    }

    /// Look up an integer parameter.
    pub fn param_i64(&self, key: &str) -> Option<i64> {
        self.params.get(key).and_then(Value::as_i64)
    }

    /// Look up a string parameter.
    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }
}

/// Wrapper for YAML deserialization (definition is nested under `strategy:`).
#[derive(Debug, Deserialize)]
pub(crate) struct StrategyDefWrapper {
    pub(crate) strategy: StrategyDef,
}

/// Wrapper for a YAML list of definitions.
#[derive(Debug, Deserialize)]
pub(crate) struct StrategyDefListWrapper {
    pub(crate) strategies: Vec<StrategyDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_definition_yaml() {
        let yaml = r#"
strategy:
  id: "pricing:percentage"
  description: "Seasonal percentage discount"
  tags:
    - "discount"
    - "seasonal"
  params:
    rate: 10
"#;
        let def = StrategyDef::from_yaml(yaml).unwrap();
        assert_eq!(def.id, "pricing:percentage");
        assert_eq!(def.namespace(), "pricing");
        assert_eq!(def.short_name(), "percentage");
        assert!(def.has_tag("seasonal"));
        assert_eq!(def.param_f64("rate"), Some(10.0));
    }

    #[test]
    fn test_builder_parameters() {
        let def = StrategyDef::new("grading:pass_fail")
            .with_description("Single-threshold classification")
            .with_tag("grading")
            .with_param("threshold", 60);
        assert_eq!(def.param_i64("threshold"), Some(60));
        assert_eq!(def.param_f64("threshold"), Some(60.0));
        assert_eq!(def.param_str("threshold"), None);
    }

    #[test]
    fn test_unnamespaced_id() {
        let def = StrategyDef::new("percentage");
        assert_eq!(def.namespace(), "percentage");
        assert_eq!(def.short_name(), "percentage");
    }
}
