//! Configuration for a pipeline run.
//!
//! Stage toggles default to **enabled** — callers opt out of individual
//! stages rather than opting in. The Answer stage has no toggle; it always
//! runs.

use crate::DEFAULT_MODEL;
use crate::prompt::ShotMode;

/// Configuration for one [`Pipeline`](super::Pipeline) invocation.
///
/// ```ignore
/// let config = PipelineConfig::default()
///     .with_mode(ShotMode::Zero)
///     .with_verify(false);
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Run the Refine stage, replacing the raw request with a refined spec.
    pub refine: bool,
    /// Run the advisory Teach-and-Ask stage. Its output is recorded but
    /// never feeds the Answer stage.
    pub teach_ask: bool,
    /// Append the comparison-table instruction to the Answer-stage task.
    pub include_table: bool,
    /// Run the Verify stage on the Answer stage's output.
    pub verify: bool,
    /// Shot mode for the Answer-stage prompt wrapper.
    pub mode: ShotMode,
    /// Model identifier used for every stage.
    pub model: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            refine: true,
            teach_ask: true,
            include_table: true,
            verify: true,
            mode: ShotMode::Few,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Enable or disable the Refine stage.
    pub fn with_refine(mut self, refine: bool) -> Self {
        self.refine = refine;
        self
    }

    /// Enable or disable the Teach-and-Ask stage.
    pub fn with_teach_ask(mut self, teach_ask: bool) -> Self {
        self.teach_ask = teach_ask;
        self
    }

    /// Enable or disable the comparison-table instruction.
    pub fn with_include_table(mut self, include_table: bool) -> Self {
        self.include_table = include_table;
        self
    }

    /// Enable or disable the Verify stage.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Set the shot mode for the Answer stage.
    pub fn with_mode(mut self, mode: ShotMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
