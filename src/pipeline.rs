//! Pipeline evaluation context.
//!
//! A [`Pipeline`] threads a running value through an ordered, fixed list of
//! stages: the output of stage *i* becomes the input of stage *i + 1*. The
//! running value moves strictly sequentially; no reordering is permitted.

use md5::{Digest, Md5};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::outputs::{PipelineOutput, StrategyOutput};
use crate::process::Process;
use crate::strategy::Strategy;
use crate::utilities::errors::ContextError;

/// A pipeline context whose stages all transform one value type.
pub struct Pipeline<T> {
    // ---- Identity ----
    /// Optional name for the pipeline.
    pub name: Option<String>,
    /// Unique identifier for the pipeline instance.
    pub id: Uuid,

    // ---- Stages ----
    stages: Vec<Arc<dyn Strategy<T, T>>>,
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("stages", &self.stage_names())
            .finish_non_exhaustive()
    }
}

impl<T> Pipeline<T> {
    /// Create a new pipeline over the given stages.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::EmptyContext`] if `stages` is empty.
    pub fn new(stages: Vec<Arc<dyn Strategy<T, T>>>) -> Result<Self, ContextError> {
        if stages.is_empty() {
            return Err(ContextError::EmptyContext {
                context: "pipeline",
            });
        }
        let pipeline = Self {
            name: None,
            id: Uuid::new_v4(),
            stages,
        };
        log::debug!(
            "assembled {} {} with {} stages",
            pipeline.process(),
            pipeline.id,
            pipeline.stages.len()
        );
        Ok(pipeline)
    }

    /// Set the pipeline name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The process mode this context runs.
    pub fn process(&self) -> Process {
        Process::Pipeline
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Compute the key property (MD5 hash of the stage names).
    pub fn key(&self) -> String {
        let combined = self.stage_names().join("|");
        let mut hasher = Md5::new();
        hasher.update(combined.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Create a copy of the pipeline with a fresh id.
    pub fn copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            id: Uuid::new_v4(),
            stages: self.stages.clone(),
        }
    }
}

impl<T: Clone + fmt::Display> Pipeline<T> {
    /// Thread `input` through every stage in order, recording the running
    /// value after each stage.
    pub fn kickoff(&self, input: T) -> PipelineOutput<T> {
        let mut current = input;
        let mut trail = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            let next = stage.evaluate(&current);
            trail.push(StrategyOutput::new(stage.name(), next.clone()));
            current = next;
        }
        PipelineOutput::new(trail, current)
    }
}
