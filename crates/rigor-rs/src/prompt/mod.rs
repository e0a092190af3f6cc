//! Prompt templates and composition.
//!
//! Two layers, mirroring the data/transform split:
//!
//! 1. **[`catalog`]** — the fixed template library: the persona system
//!    prompt, the four [`ModePrompt`](catalog::ModePrompt) stage headers,
//!    and the instruction fragments. Immutable process-wide constants.
//! 2. **[`compose`]** — pure functions that concatenate a task with the
//!    catalog fragments per [`ShotMode`](compose::ShotMode). The only place
//!    template text and task text meet.

pub mod catalog;
pub mod compose;

pub use catalog::{FILL_IN_THE_BLANK, ModePrompt, PERSONA, TABULAR_INSTRUCTION};
pub use compose::{ShotMode, compose_few, compose_one, compose_zero, select};
