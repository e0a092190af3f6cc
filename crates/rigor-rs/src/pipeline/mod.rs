//! Pipeline orchestration: configuration and the staged runner.
//!
//! - [`config`] — [`PipelineConfig`] stage toggles, shot mode, and model.
//! - [`runner`] — [`Pipeline`], the fixed Refine → Teach-and-Ask → Answer
//!   → Verify sequence, and the [`PipelineRun`] / [`PipelineFailure`]
//!   result types.

pub mod config;
pub mod runner;

pub use config::PipelineConfig;
pub use runner::{Pipeline, PipelineFailure, PipelineRun, Stage};
