//! Per-strategy output representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of invoking a single strategy.
///
/// # Fields
///
/// * `strategy` - Name of the strategy that produced the value.
/// * `raw` - Human-readable rendering of the value.
/// * `value` - The typed output itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOutput<O> {
    /// Name of the strategy that produced this output.
    pub strategy: String,
    /// Raw rendering of the value.
    pub raw: String,
    /// The typed output value.
    pub value: O,
}

impl<O: fmt::Display> StrategyOutput<O> {
    /// Create a new output, rendering `raw` from the value.
    pub fn new(strategy: impl Into<String>, value: O) -> Self {
        let raw = value.to_string();
        Self {
            strategy: strategy.into(),
            raw,
            value,
        }
    }
}

impl<O> fmt::Display for StrategyOutput<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
