//! Pure prompt composition.
//!
//! Combines a task string with the fixed templates from
//! [`catalog`](super::catalog) into the final user-turn prompt for the
//! Answer stage. Every function here is a deterministic string transform —
//! no I/O, no hidden state — and every output places the task text strictly
//! after all instructional/example text, so formatting instructions are
//! established as context before the model sees the task.

use std::str::FromStr;

use tracing::warn;

use super::catalog::{FEW_SHOT_WRAPPER, IMITATE_FORMAT, ModePrompt, ONE_SHOT_WRAPPER};
use crate::error::Error;

/// How many worked examples accompany the Answer-stage prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShotMode {
    /// No examples — just the reasoning-visibility instructions.
    Zero,
    /// One worked example to imitate.
    One,
    /// Two worked examples for the strongest format steering.
    #[default]
    Few,
}

impl ShotMode {
    /// Parse a selector, falling back to [`ShotMode::Few`] on unrecognized
    /// input instead of failing.
    ///
    /// The lossy counterpart to the [`FromStr`] impl, for free-form console
    /// input. The fallback is logged so caller bugs stay visible.
    pub fn from_input(input: &str) -> Self {
        input.parse().unwrap_or_else(|_| {
            warn!("unrecognized shot mode '{input}', defaulting to few");
            ShotMode::Few
        })
    }
}

impl FromStr for ShotMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" => Ok(ShotMode::Zero),
            "one" => Ok(ShotMode::One),
            "few" => Ok(ShotMode::Few),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for ShotMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShotMode::Zero => write!(f, "zero"),
            ShotMode::One => write!(f, "one"),
            ShotMode::Few => write!(f, "few"),
        }
    }
}

/// Zero-shot prompt: the reasoning-visibility instructions, a blank line,
/// then the task.
pub fn compose_zero(task: &str) -> String {
    format!(
        "{}\n\nTask:\n{task}",
        ModePrompt::ReasoningVisibility.text()
    )
    .trim()
    .to_string()
}

/// One-shot prompt: a single worked example, the task, and the imitation
/// instruction.
pub fn compose_one(task: &str) -> String {
    format!("{ONE_SHOT_WRAPPER}\n{task}\n\n{IMITATE_FORMAT}")
        .trim()
        .to_string()
}

/// Few-shot prompt: two worked examples, the task, and the imitation
/// instruction.
pub fn compose_few(task: &str) -> String {
    format!("{FEW_SHOT_WRAPPER}\n{task}\n\n{IMITATE_FORMAT}")
        .trim()
        .to_string()
}

/// Dispatch on the shot mode.
///
/// Total over [`ShotMode`] — an unrecognized selector can only exist as a
/// string, and is rejected by the [`FromStr`] impl before it gets here.
pub fn select(mode: ShotMode, task: &str) -> String {
    match mode {
        ShotMode::Zero => compose_zero(task),
        ShotMode::One => compose_one(task),
        ShotMode::Few => compose_few(task),
    }
}
