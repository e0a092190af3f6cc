//! The four-stage pipeline runner.
//!
//! [`Pipeline`] drives the fixed Refine → Teach-and-Ask → Answer → Verify
//! sequence against any [`CompletionClient`], one blocking call per enabled
//! stage, strictly in order. The Answer stage always runs; the others are
//! toggled by [`PipelineConfig`]. A stage failure aborts the rest of the
//! run — the stage outputs computed so far travel with the error as
//! [`PipelineFailure::partial`].
//!
//! Input threading follows two rules:
//!
//! - Only Refine reassigns the task text the Answer stage sees. With Refine
//!   disabled, the Answer stage composes over the raw request unmodified.
//! - Teach-and-Ask is advisory: it reads the current task text, and its
//!   output is recorded but never feeds forward.

use thiserror::Error;
use tracing::{debug, info};

use super::config::PipelineConfig;
use crate::CompletionClient;
use crate::error::CompletionError;
use crate::prompt::catalog::{ModePrompt, TABULAR_INSTRUCTION};
use crate::prompt::compose;

// ── Stage temperatures ─────────────────────────────────────────────
//
// Low for the deterministic rewriting/checking stages, slightly higher
// where the model drafts prose.

const REFINE_TEMPERATURE: f32 = 0.1;
const TEACH_ASK_TEMPERATURE: f32 = 0.2;
const ANSWER_TEMPERATURE: f32 = 0.2;
const VERIFY_TEMPERATURE: f32 = 0.1;

// ── Stages ─────────────────────────────────────────────────────────

/// One discrete templated call within the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Refine,
    TeachAndAsk,
    Answer,
    Verify,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Refine => write!(f, "refine"),
            Stage::TeachAndAsk => write!(f, "teach-and-ask"),
            Stage::Answer => write!(f, "answer"),
            Stage::Verify => write!(f, "verify"),
        }
    }
}

// ── Results ────────────────────────────────────────────────────────

/// Aggregate of stage outputs from one pipeline invocation.
///
/// A disabled stage leaves its slot `None`; a populated slot holds the raw
/// text the model returned for that stage. Discarded after being reported
/// to the caller — there is no cross-run state.
#[derive(Debug, Clone, Default)]
pub struct PipelineRun {
    /// Refine-stage output, when the stage ran.
    pub refined: Option<String>,
    /// Teach-and-Ask output, when the stage ran. Advisory only.
    pub teach_ask: Option<String>,
    /// Answer-stage output. `None` only when the run failed at or before
    /// the Answer stage.
    pub answer: Option<String>,
    /// Verify-stage output, when the stage ran.
    pub verifier: Option<String>,
}

impl PipelineRun {
    /// Populated stage outputs in pipeline order, with report titles.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        [
            ("REFINED SPEC", &self.refined),
            ("TEACH + ASK", &self.teach_ask),
            ("ANSWER", &self.answer),
            ("VERIFIER", &self.verifier),
        ]
        .into_iter()
        .filter_map(|(title, slot)| slot.as_deref().map(|text| (title, text)))
        .collect()
    }
}

/// A stage call failed; the remaining stages were not attempted.
///
/// Carries every stage output computed before the failure, so callers can
/// still report partial progress.
#[derive(Error, Debug)]
#[error("{stage} stage failed: {source}")]
pub struct PipelineFailure {
    /// The stage whose completion call failed.
    pub stage: Stage,
    pub source: CompletionError,
    /// Stage outputs computed before the failure.
    pub partial: PipelineRun,
}

// ── Pipeline ───────────────────────────────────────────────────────

/// The staged prompt pipeline.
///
/// Borrows the client by reference; the reference must outlive the
/// [`run()`](Pipeline::run) call.
///
/// ```ignore
/// let client = GroqClient::new(api_key)?;
/// let run = Pipeline::new(&client, PipelineConfig::default())
///     .run("Design a caching layer for an API")
///     .await?;
/// ```
pub struct Pipeline<'a, C> {
    client: &'a C,
    config: PipelineConfig,
}

impl<'a, C: CompletionClient> Pipeline<'a, C> {
    /// Create a pipeline over the given client and configuration.
    pub fn new(client: &'a C, config: PipelineConfig) -> Self {
        Self { client, config }
    }

    /// Run the pipeline on a raw request.
    ///
    /// Issues one completion call per enabled stage, in fixed order, and
    /// returns the populated [`PipelineRun`]. On a stage failure, returns
    /// [`PipelineFailure`] carrying the outputs computed so far.
    pub async fn run(&self, raw_request: &str) -> Result<PipelineRun, PipelineFailure> {
        let mut run = PipelineRun::default();

        // Refine is the only stage allowed to replace the task text.
        let mut task_for_answer = raw_request.to_string();
        if self.config.refine {
            info!("refine stage: rewriting the raw request");
            let prompt = format!(
                "{}\n\nUser request:\n{raw_request}",
                ModePrompt::Refiner.text()
            );
            let refined = self
                .stage_call(Stage::Refine, &run, &prompt, REFINE_TEMPERATURE)
                .await?;
            task_for_answer.clone_from(&refined);
            run.refined = Some(refined);
        } else {
            debug!("refine stage disabled, answering the raw request");
        }

        // Advisory pass: recorded, never fed forward.
        if self.config.teach_ask {
            info!("teach-and-ask stage: surfacing design options");
            let prompt = format!(
                "{}\n\nContext:\n{task_for_answer}",
                ModePrompt::TeachAndAsk.text()
            );
            let teach = self
                .stage_call(Stage::TeachAndAsk, &run, &prompt, TEACH_ASK_TEMPERATURE)
                .await?;
            run.teach_ask = Some(teach);
        }

        // Answer always runs.
        info!("answer stage: {} mode", self.config.mode);
        let final_task = if self.config.include_table {
            format!("{task_for_answer}\n\n{TABULAR_INSTRUCTION}")
        } else {
            task_for_answer
        };
        let prompt = compose::select(self.config.mode, &final_task);
        let answer = self
            .stage_call(Stage::Answer, &run, &prompt, ANSWER_TEMPERATURE)
            .await?;
        run.answer = Some(answer);

        // Verify reads the Answer stage's raw output, never anything earlier.
        if self.config.verify {
            info!("verify stage: checking the answer");
            let answer_text = run.answer.as_deref().unwrap_or_default();
            let prompt = format!(
                "{}\n\nAnswer to verify:\n{answer_text}",
                ModePrompt::Verifier.text()
            );
            let verdict = self
                .stage_call(Stage::Verify, &run, &prompt, VERIFY_TEMPERATURE)
                .await?;
            run.verifier = Some(verdict);
        }

        Ok(run)
    }

    async fn stage_call(
        &self,
        stage: Stage,
        partial: &PipelineRun,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, PipelineFailure> {
        debug!("{stage} prompt: {} chars, temp={temperature}", prompt.len());
        self.client
            .complete(prompt, &self.config.model, temperature)
            .await
            .map_err(|source| PipelineFailure {
                stage,
                source,
                partial: partial.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ShotMode;
    use std::sync::Mutex;

    const RAW: &str = "Design a caching layer for an API";

    #[derive(Debug, Clone)]
    struct RecordedCall {
        prompt: String,
        model: String,
        temperature: f32,
    }

    /// Scripted client that records every call and can fail at one index.
    struct ScriptedClient {
        calls: Mutex<Vec<RecordedCall>>,
        fail_at: Option<usize>,
    }

    impl ScriptedClient {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_at: None,
            }
        }

        fn failing_at(index: usize) -> Self {
            Self {
                fail_at: Some(index),
                ..Self::new()
            }
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CompletionClient for ScriptedClient {
        async fn complete(
            &self,
            prompt: &str,
            model: &str,
            temperature: f32,
        ) -> Result<String, CompletionError> {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.len();
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                model: model.to_string(),
                temperature,
            });
            if self.fail_at == Some(index) {
                return Err(CompletionError::Api("scripted failure".into()));
            }
            Ok(format!("reply-{index}"))
        }
    }

    fn answer_call(calls: &[RecordedCall]) -> &RecordedCall {
        calls
            .iter()
            .find(|c| c.prompt.contains("NOW DO THIS TASK:"))
            .expect("no answer-stage call recorded")
    }

    #[tokio::test]
    async fn full_run_populates_every_slot() {
        let client = ScriptedClient::new();
        let run = Pipeline::new(&client, PipelineConfig::default())
            .run(RAW)
            .await
            .unwrap();

        assert_eq!(run.refined.as_deref(), Some("reply-0"));
        assert_eq!(run.teach_ask.as_deref(), Some("reply-1"));
        assert_eq!(run.answer.as_deref(), Some("reply-2"));
        assert_eq!(run.verifier.as_deref(), Some("reply-3"));
        assert_eq!(client.calls().len(), 4);
    }

    #[tokio::test]
    async fn stage_temperatures_follow_the_schedule() {
        let client = ScriptedClient::new();
        Pipeline::new(&client, PipelineConfig::default())
            .run(RAW)
            .await
            .unwrap();

        let temps: Vec<f32> = client.calls().iter().map(|c| c.temperature).collect();
        assert_eq!(temps, vec![0.1, 0.2, 0.2, 0.1]);
    }

    #[tokio::test]
    async fn every_stage_uses_the_configured_model() {
        let client = ScriptedClient::new();
        let config = PipelineConfig::default().with_model("llama-3.1-8b-instant");
        Pipeline::new(&client, config).run(RAW).await.unwrap();

        assert!(
            client
                .calls()
                .iter()
                .all(|c| c.model == "llama-3.1-8b-instant")
        );
    }

    #[tokio::test]
    async fn disabled_refine_answers_the_raw_request() {
        let client = ScriptedClient::new();
        let config = PipelineConfig::default()
            .with_refine(false)
            .with_teach_ask(false)
            .with_include_table(false)
            .with_verify(false);
        let run = Pipeline::new(&client, config).run(RAW).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert!(answer_call(&calls).prompt.contains(RAW));
        assert!(run.refined.is_none());
        assert!(run.teach_ask.is_none());
        assert!(run.verifier.is_none());
    }

    #[tokio::test]
    async fn refined_output_replaces_the_raw_request() {
        let client = ScriptedClient::new();
        let config = PipelineConfig::default()
            .with_teach_ask(false)
            .with_include_table(false)
            .with_verify(false);
        Pipeline::new(&client, config).run(RAW).await.unwrap();

        let calls = client.calls();
        // reply-0 is the refine output; the answer prompt embeds it, not RAW.
        let answer_prompt = &answer_call(&calls).prompt;
        assert!(answer_prompt.contains("reply-0"));
        assert!(!answer_prompt.contains(RAW));
    }

    #[tokio::test]
    async fn teach_ask_never_influences_the_answer_prompt() {
        let with_teach = ScriptedClient::new();
        Pipeline::new(&with_teach, PipelineConfig::default())
            .run(RAW)
            .await
            .unwrap();

        let without_teach = ScriptedClient::new();
        Pipeline::new(
            &without_teach,
            PipelineConfig::default().with_teach_ask(false),
        )
        .run(RAW)
        .await
        .unwrap();

        let a = answer_call(&with_teach.calls()).prompt.clone();
        let b = answer_call(&without_teach.calls()).prompt.clone();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn include_table_toggles_the_instruction() {
        let with_table = ScriptedClient::new();
        Pipeline::new(&with_table, PipelineConfig::default())
            .run(RAW)
            .await
            .unwrap();
        assert!(
            answer_call(&with_table.calls())
                .prompt
                .contains(TABULAR_INSTRUCTION)
        );

        let without_table = ScriptedClient::new();
        Pipeline::new(
            &without_table,
            PipelineConfig::default().with_include_table(false),
        )
        .run(RAW)
        .await
        .unwrap();
        assert!(
            !answer_call(&without_table.calls())
                .prompt
                .contains(TABULAR_INSTRUCTION)
        );
    }

    #[tokio::test]
    async fn shot_mode_selects_the_wrapper() {
        let client = ScriptedClient::new();
        let config = PipelineConfig::default()
            .with_refine(false)
            .with_teach_ask(false)
            .with_verify(false)
            .with_mode(ShotMode::Zero);
        Pipeline::new(&client, config).run(RAW).await.unwrap();

        let calls = client.calls();
        assert!(calls[0].prompt.contains("REASONING VISIBILITY MODE"));
        assert!(!calls[0].prompt.contains("NOW DO THIS TASK:"));
    }

    #[tokio::test]
    async fn refine_failure_aborts_before_any_later_call() {
        let client = ScriptedClient::failing_at(0);
        let failure = Pipeline::new(&client, PipelineConfig::default())
            .run(RAW)
            .await
            .unwrap_err();

        assert_eq!(failure.stage, Stage::Refine);
        assert!(matches!(failure.source, CompletionError::Api(_)));
        assert!(failure.partial.refined.is_none());
        assert!(failure.partial.answer.is_none());
        // Only the refine call was ever attempted.
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn verify_failure_keeps_the_answer_in_the_partial() {
        let client = ScriptedClient::failing_at(3);
        let failure = Pipeline::new(&client, PipelineConfig::default())
            .run(RAW)
            .await
            .unwrap_err();

        assert_eq!(failure.stage, Stage::Verify);
        assert_eq!(failure.partial.answer.as_deref(), Some("reply-2"));
        assert_eq!(failure.partial.refined.as_deref(), Some("reply-0"));
        assert!(failure.partial.verifier.is_none());
    }

    #[tokio::test]
    async fn verify_reads_the_answer_output_verbatim() {
        let client = ScriptedClient::new();
        Pipeline::new(&client, PipelineConfig::default())
            .run(RAW)
            .await
            .unwrap();

        let calls = client.calls();
        let verify_prompt = &calls[3].prompt;
        assert!(verify_prompt.contains("COGNITIVE VERIFIER MODE"));
        // reply-2 is the answer output; verify embeds it, not the refined spec.
        assert!(verify_prompt.contains("Answer to verify:\nreply-2"));
        assert!(!verify_prompt.contains("reply-0"));
    }

    #[tokio::test]
    async fn disabled_verify_leaves_the_slot_empty() {
        let client = ScriptedClient::new();
        let run = Pipeline::new(&client, PipelineConfig::default().with_verify(false))
            .run(RAW)
            .await
            .unwrap();

        assert!(run.answer.is_some());
        assert!(run.verifier.is_none());
        assert_eq!(client.calls().len(), 3);
    }

    #[test]
    fn sections_preserve_pipeline_order() {
        let run = PipelineRun {
            refined: Some("r".into()),
            teach_ask: None,
            answer: Some("a".into()),
            verifier: Some("v".into()),
        };
        let titles: Vec<&str> = run.sections().iter().map(|(t, _)| *t).collect();
        assert_eq!(titles, vec!["REFINED SPEC", "ANSWER", "VERIFIER"]);
    }

    #[test]
    fn failure_display_names_the_stage() {
        let failure = PipelineFailure {
            stage: Stage::TeachAndAsk,
            source: CompletionError::Empty,
            partial: PipelineRun::default(),
        };
        assert!(failure.to_string().starts_with("teach-and-ask stage failed"));
    }
}
