//! Staged prompt pipeline for production-grade engineering answers.
//!
//! `rigor-rs` drives a fixed four-stage sequence of chat-completion calls
//! against the [Groq](https://groq.com/) OpenAI-compatible API: a request is
//! optionally **refined** into an explicit spec, optionally annotated by a
//! **teach-and-ask** pass, **answered** under a zero-/one-/few-shot prompt
//! wrapper, and optionally **verified** by a cognitive-verifier pass. Every
//! call carries the same senior-engineer persona as its system message, so
//! responses arrive in a uniform Answer / Reasoning Summary / Trade-offs /
//! Failure Modes / Production Checklist shape.
//!
//! # Getting started
//!
//! ```ignore
//! use rigor_rs::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rigor_rs::Error> {
//!     let config = Config::from_env()?;
//!     let client = GroqClient::new(config.api_key)?;
//!
//!     let run = Pipeline::new(&client, PipelineConfig::default())
//!         .run("Design a caching layer for an API")
//!         .await
//!         .map_err(|f| f.source)?;
//!
//!     println!("{}", run.answer.unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! # Where to find things
//!
//! - **Prompt templates:** [`prompt::catalog`] — the persona, the four
//!   [`ModePrompt`](prompt::catalog::ModePrompt) variants, and the
//!   instruction fragments. Pure data, fixed for the process lifetime.
//! - **Prompt composition:** [`prompt::compose`] —
//!   [`ShotMode`](prompt::compose::ShotMode) and the pure
//!   `compose_zero` / `compose_one` / `compose_few` / `select` transforms.
//! - **Running the pipeline:** [`Pipeline`](pipeline::Pipeline) +
//!   [`PipelineConfig`](pipeline::PipelineConfig). The result is a
//!   [`PipelineRun`](pipeline::PipelineRun) with one optional text slot per
//!   stage; failures carry the partial run in
//!   [`PipelineFailure`](pipeline::PipelineFailure).
//! - **Swapping the provider:** implement [`CompletionClient`] — the
//!   pipeline only sees that trait, so tests substitute a scripted fake.
//!
//! # Design notes
//!
//! 1. **Stages are strictly sequential.** Each stage blocks on its full
//!    response before the next stage composes its prompt. There is no
//!    concurrency, retry, or cancellation at this layer.
//! 2. **Composition is pure.** Template text and task text meet only
//!    through string concatenation; the task always lands after the
//!    instructions so formatting context is established first.
//! 3. **Failures abort the run.** A stage error stops the pipeline, and
//!    the outputs already computed travel with the error.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod prompt;
pub mod ui;

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::error::CompletionError;
use crate::prompt::catalog::PERSONA;

// ── Constants ──────────────────────────────────────────────────────

/// Groq's OpenAI-compatible chat completions endpoint.
pub const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model for all pipeline stages.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

// ── Request types ──────────────────────────────────────────────────

/// Chat completion request body.
///
/// Only the fields this pipeline actually sends — model, temperature, and
/// the two-turn message list. The provider's wire format is its own
/// contract; anything it defaults sensibly is omitted here.
#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<Message>,
}

/// Role of a message in the conversation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A message in the conversation.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

// ── Response types ─────────────────────────────────────────────────

/// Raw API response (internal deserialization target).
#[derive(Deserialize, Debug)]
struct RawChatResponse {
    choices: Option<Vec<RawChoice>>,
    error: Option<ApiErrorResponse>,
    #[serde(default)]
    usage: Option<UsageInfo>,
}

#[derive(Deserialize, Debug)]
struct RawChoice {
    message: RawResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    message: String,
}

/// Clean return type from [`GroqClient::chat`].
#[derive(Debug)]
pub struct ChatCompletion {
    /// Text content of the first completion choice.
    pub content: String,
    pub usage: Option<UsageInfo>,
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Deserialize, Debug, Clone)]
pub struct UsageInfo {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

// ── Client ─────────────────────────────────────────────────────────

/// The seam between the pipeline and the completion provider.
///
/// One call issues one completion request: the composed prompt travels as
/// the user turn, the fixed persona as the system turn. Implementations do
/// not retry — retry policy, if any, belongs to the caller.
///
/// [`GroqClient`] is the production implementation; tests use scripted
/// fakes that record what the pipeline sent.
pub trait CompletionClient {
    /// Complete `prompt` with the given model and sampling temperature,
    /// returning the generated text.
    fn complete(
        &self,
        prompt: &str,
        model: &str,
        temperature: f32,
    ) -> impl Future<Output = Result<String, CompletionError>>;
}

/// Async HTTP client for the Groq chat completions API.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
}

impl GroqClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .user_agent("rigor-rs/0.1")
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Send a chat completion request and return the first choice.
    pub async fn chat(&self, body: &ChatRequest) -> Result<ChatCompletion, CompletionError> {
        debug!(
            "LLM request: model={}, messages={}, temp={}",
            body.model,
            body.messages.len(),
            body.temperature,
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(GROQ_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        debug!(
            "LLM response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(CompletionError::Http { status, body: text });
        }

        let parsed: RawChatResponse = serde_json::from_str(&text)?;

        if let Some(err) = parsed.error {
            return Err(CompletionError::Api(err.message));
        }

        if let Some(ref usage) = parsed.usage {
            debug!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens.unwrap_or(0),
                usage.completion_tokens.unwrap_or(0),
                usage.total_tokens.unwrap_or(0),
            );
        }

        let choice = parsed
            .choices
            .and_then(|c| c.into_iter().next())
            .ok_or(CompletionError::Empty)?;

        let content = choice.message.content.ok_or(CompletionError::Empty)?;
        debug!("LLM output: {} chars text", content.len());

        Ok(ChatCompletion {
            content,
            usage: parsed.usage,
            finish_reason: choice.finish_reason,
        })
    }
}

impl CompletionClient for GroqClient {
    async fn complete(
        &self,
        prompt: &str,
        model: &str,
        temperature: f32,
    ) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: model.to_string(),
            temperature,
            messages: vec![Message::system(PERSONA), Message::user(prompt)],
        };
        let completion = self.chat(&body).await?;
        Ok(completion.content)
    }
}
