//! Fan-out context output representation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::process::Process;

use super::strategy_output::StrategyOutput;

/// The result of a panel kickoff: one output per strategy, in registration
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelOutput<O> {
    /// Output of each strategy, in registration order.
    pub results: Vec<StrategyOutput<O>>,
    /// The process mode that produced this output.
    pub process: Process,
}

impl<O> PanelOutput<O> {
    /// Create a new fan-out output.
    pub fn new(results: Vec<StrategyOutput<O>>) -> Self {
        Self {
            results,
            process: Process::FanOut,
        }
    }

    /// Borrow the typed values, in registration order.
    pub fn values(&self) -> Vec<&O> {
        self.results.iter().map(|r| &r.value).collect()
    }

    /// Consume the output and return the typed values, in registration order.
    pub fn into_values(self) -> Vec<O> {
        self.results.into_iter().map(|r| r.value).collect()
    }

    /// Number of collected results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether any results were collected.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<O> fmt::Display for PanelOutput<O> {
    /// Renders like a list literal, e.g. `[C, Pass]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raws: Vec<&str> = self.results.iter().map(|r| r.raw.as_str()).collect();
        write!(f, "[{}]", raws.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_raw_results() {
        let output = PanelOutput::new(vec![
            StrategyOutput::new("grading:numeric", "C".to_string()),
            StrategyOutput::new("grading:pass_fail", "Pass".to_string()),
        ]);
        assert_eq!(output.to_string(), "[C, Pass]");
        assert_eq!(output.len(), 2);
        assert!(!output.is_empty());
        assert_eq!(output.values(), vec!["C", "Pass"]);
        assert_eq!(output.process, Process::FanOut);
    }

    #[test]
    fn test_values_preserve_order() {
        let output = PanelOutput::new(vec![
            StrategyOutput::new("a", 1),
            StrategyOutput::new("b", 2),
            StrategyOutput::new("c", 3),
        ]);
        assert_eq!(output.into_values(), vec![1, 2, 3]);
    }
}
