//! Pipeline context output representation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::process::Process;

use super::strategy_output::StrategyOutput;

/// The result of a pipeline kickoff: the per-stage trail and the final
/// threaded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput<T> {
    /// Running value after each stage, in stage order.
    pub stages: Vec<StrategyOutput<T>>,
    /// The last stage's output.
    pub final_value: T,
    /// The process mode that produced this output.
    pub process: Process,
}

impl<T> PipelineOutput<T> {
    /// Create a new pipeline output.
    pub fn new(stages: Vec<StrategyOutput<T>>, final_value: T) -> Self {
        Self {
            stages,
            final_value,
            process: Process::Pipeline,
        }
    }

    /// Number of stages that ran.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether any stages ran.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for PipelineOutput<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.final_value)
    }
}
