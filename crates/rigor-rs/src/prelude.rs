//! Convenience re-exports for common `rigor-rs` types.
//!
//! Meant to be glob-imported when driving the pipeline:
//!
//! ```ignore
//! use rigor_rs::prelude::*;
//! ```
//!
//! This pulls in the client, the pipeline and its config/result types, the
//! shot modes, and the startup config. Template constants and the raw wire
//! types are intentionally excluded — import those from
//! [`prompt`](crate::prompt) and the crate root directly when needed.

// ── Client ──────────────────────────────────────────────────────────
pub use crate::{CompletionClient, GroqClient, Message};

// ── Pipeline ────────────────────────────────────────────────────────
pub use crate::pipeline::{Pipeline, PipelineConfig, PipelineFailure, PipelineRun, Stage};

// ── Prompts ─────────────────────────────────────────────────────────
pub use crate::prompt::ShotMode;

// ── Configuration & errors ──────────────────────────────────────────
pub use crate::config::Config;
pub use crate::error::{CompletionError, ConfigError, Error};
