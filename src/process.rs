//! Process types for context execution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the different ways a context can run its strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    /// Every strategy evaluates the same input independently; results are
    /// collected in registration order.
    FanOut,
    /// Each strategy's output becomes the next strategy's input; the final
    /// result is the last strategy's output.
    Pipeline,
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Process::FanOut => write!(f, "fan_out"),
            Process::Pipeline => write!(f, "pipeline"),
        }
    }
}

impl Default for Process {
    fn default() -> Self {
        Process::FanOut
    }
}
