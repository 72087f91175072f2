//! Fan-out evaluation context.
//!
//! A [`Panel`] holds an ordered, fixed-at-construction list of strategies
//! that all share one input/output contract. Kicking a panel off evaluates
//! every strategy against the same input independently and collects the
//! results in registration order.

use md5::{Digest, Md5};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::outputs::{PanelOutput, StrategyOutput};
use crate::process::Process;
use crate::strategy::Strategy;
use crate::utilities::errors::ContextError;

/// A fan-out context over interchangeable strategies.
///
/// The strategy list is fixed at construction: strategies cannot be added
/// or removed afterwards, and the panel never inspects their concrete
/// types.
pub struct Panel<I, O> {
    // ---- Identity ----
    /// Optional name for the panel.
    pub name: Option<String>,
    /// Unique identifier for the panel instance.
    pub id: Uuid,

    // ---- Strategies ----
    strategies: Vec<Arc<dyn Strategy<I, O>>>,
}

impl<I, O> fmt::Debug for Panel<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("strategies", &self.strategy_names())
            .finish_non_exhaustive()
    }
}

impl<I, O> Panel<I, O> {
    /// Create a new panel over the given strategies.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::EmptyContext`] if `strategies` is empty, so
    /// an unrunnable panel can never be constructed.
    pub fn new(strategies: Vec<Arc<dyn Strategy<I, O>>>) -> Result<Self, ContextError> {
        if strategies.is_empty() {
            return Err(ContextError::EmptyContext { context: "panel" });
        }
        let panel = Self {
            name: None,
            id: Uuid::new_v4(),
            strategies,
        };
        log::debug!(
            "assembled {} panel {} with {} strategies",
            panel.process(),
            panel.id,
            panel.strategies.len()
        );
        Ok(panel)
    }

    /// Set the panel name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The process mode this context runs.
    pub fn process(&self) -> Process {
        Process::FanOut
    }

    /// Names of the registered strategies, in registration order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Compute the key property (MD5 hash of the registered strategy names).
    pub fn key(&self) -> String {
        let combined = self.strategy_names().join("|");
        let mut hasher = Md5::new();
        hasher.update(combined.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Create a copy of the panel with a fresh id. Strategies are immutable
    /// and therefore shared.
    pub fn copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            id: Uuid::new_v4(),
            strategies: self.strategies.clone(),
        }
    }
}

impl<I, O: fmt::Display> Panel<I, O> {
    /// Evaluate every strategy against `input`.
    ///
    /// Always returns exactly one result per registered strategy, in
    /// registration order, regardless of the input value.
    pub fn kickoff(&self, input: &I) -> PanelOutput<O> {
        let results = self
            .strategies
            .iter()
            .map(|strategy| StrategyOutput::new(strategy.name(), strategy.evaluate(input)))
            .collect();
        PanelOutput::new(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offset {
        name: &'static str,
        by: i32,
    }

    impl Strategy<i32, i32> for Offset {
        fn name(&self) -> &str {
            self.name
        }

        fn evaluate(&self, input: &i32) -> i32 {
            input + self.by
        }
    }

    fn panel_of(offsets: &[(&'static str, i32)]) -> Panel<i32, i32> {
        let strategies = offsets
            .iter()
            .map(|&(name, by)| Arc::new(Offset { name, by }) as Arc<dyn Strategy<i32, i32>>)
            .collect();
        Panel::new(strategies).unwrap()
    }

    #[test]
    fn test_empty_panel_is_rejected() {
        let err = Panel::<i32, i32>::new(Vec::new()).unwrap_err();
        assert_eq!(err, ContextError::EmptyContext { context: "panel" });
    }

    #[test]
    fn test_kickoff_returns_one_result_per_strategy() {
        let panel = panel_of(&[("a", 1), ("b", 2), ("c", 3)]);
        let output = panel.kickoff(&10);
        assert_eq!(output.len(), 3);
        assert_eq!(output.into_values(), vec![11, 12, 13]);
    }

    #[test]
    fn test_kickoff_is_stable_across_invocations() {
        let panel = panel_of(&[("a", 1), ("b", 2)]);
        assert_eq!(panel.kickoff(&5), panel.kickoff(&5));
    }

    #[test]
    fn test_key_depends_on_strategy_names_only() {
        let panel = panel_of(&[("a", 1), ("b", 2)]);
        let same_names = panel_of(&[("a", 9), ("b", 9)]);
        let other_names = panel_of(&[("b", 1), ("a", 2)]);
        assert_eq!(panel.key(), same_names.key());
        assert_ne!(panel.key(), other_names.key());
    }

    #[test]
    fn test_copy_shares_strategies_under_a_new_id() {
        let panel = panel_of(&[("a", 1)]).with_name("grades");
        let copy = panel.copy();
        assert_ne!(panel.id, copy.id);
        assert_eq!(panel.name, copy.name);
        assert_eq!(panel.kickoff(&1), copy.kickoff(&1));
    }

    #[test]
    fn test_process_is_fan_out() {
        let panel = panel_of(&[("a", 1)]);
        assert_eq!(panel.process(), Process::FanOut);
    }
}
