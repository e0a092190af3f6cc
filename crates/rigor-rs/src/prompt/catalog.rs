//! Fixed catalog of prompt templates.
//!
//! Every fragment the pipeline can send is defined here as a pre-trimmed
//! `&'static str` — the persona sent as the system turn of every call, the
//! four [`ModePrompt`] variants that head a stage's user turn, and the
//! composable instruction fragments. Nothing in this module is parameterized
//! or mutated at runtime; composition happens in
//! [`compose`](super::compose) by concatenation.

/// The persona sent as the system message on every completion call.
pub const PERSONA: &str = "You are Arjun Rao, a senior full-stack engineer and GenAI systems architect with 10+ years of production experience.

Core mindset:
- Correctness over cleverness
- Systems over snippets
- Explicit trade-offs over magic abstractions
- Production reality over demos

Rules:
- Never hallucinate APIs, citations, or benchmarks.
- If missing info, state assumptions explicitly.
- Think deeply internally; DO NOT reveal chain-of-thought.
- Instead provide: answer, concise reasoning summary, trade-offs, failure modes, production checklist.";

/// Which stage-heading prompt a completion call is operating under.
///
/// One variant per pipeline mode, so the composer and its tests can range
/// over every template exhaustively via [`ModePrompt::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModePrompt {
    /// Restate the problem, extract requirements, surface missing info.
    Refiner,
    /// Present key options and targeted questions with a default pick.
    TeachAndAsk,
    /// Check an answer for coverage, claims, security, edge cases.
    Verifier,
    /// Summarize reasoning without revealing chain-of-thought.
    ReasoningVisibility,
}

impl ModePrompt {
    /// Every mode prompt, for exhaustive iteration in tests.
    pub const ALL: [ModePrompt; 4] = [
        ModePrompt::Refiner,
        ModePrompt::TeachAndAsk,
        ModePrompt::Verifier,
        ModePrompt::ReasoningVisibility,
    ];

    /// The template text for this mode.
    pub const fn text(self) -> &'static str {
        match self {
            ModePrompt::Refiner => REFINER_PROMPT,
            ModePrompt::TeachAndAsk => TEACH_AND_ASK_PROMPT,
            ModePrompt::Verifier => VERIFIER_PROMPT,
            ModePrompt::ReasoningVisibility => REASONING_VISIBILITY_PROMPT,
        }
    }
}

const REFINER_PROMPT: &str = "QUESTION REFINEMENT MODE:
1) Restate the problem in 1-2 lines.
2) Extract requirements (functional + non-functional).
3) Identify missing critical info (max 2 questions).
4) If user doesn't answer, proceed with explicit assumptions.

Return output in this exact format:
Restated problem:
Requirements:
Missing info (max 2 questions):
Assumptions (if needed):
RGC Prompt (final):";

const TEACH_AND_ASK_PROMPT: &str = "TEACH-AND-ASK MODE:
1) Provide 2-3 key options/facts that affect the design.
2) Ask 1-2 targeted questions that decide the correct choice.
3) Give a default recommendation if unanswered, with assumptions.

Output:
Key options:
Default recommendation:
Questions (max 2):";

const VERIFIER_PROMPT: &str = "COGNITIVE VERIFIER MODE:
Check the answer for:
1) Requirement coverage
2) Incorrect claims / missing assumptions
3) Security risks
4) Edge cases (at least 3)
5) Scalability/performance risks
6) Test plan adequacy

Output ONLY:
Verifier Notes:
- ...
Fix Suggestions:
- ...";

const REASONING_VISIBILITY_PROMPT: &str = "REASONING VISIBILITY MODE (no chain-of-thought):
Do NOT show hidden step-by-step reasoning.

Instead output:
- Key reasoning summary (3-6 bullets)
- Decision checklist
- Verification plan

Then provide final answer in this format:
Answer:
Reasoning Summary:
Trade-offs:
Failure Modes:
Production Checklist:";

/// Appended to the task when a comparison table is requested.
pub const TABULAR_INSTRUCTION: &str = "Also include a comparison table with columns:
Option | Complexity | Latency | Cost | Dev Time | Failure Modes | Best When
Then recommend one option.";

/// Request scaffold printed by `rigor --show-template` so users can
/// structure a request before running the pipeline.
pub const FILL_IN_THE_BLANK: &str = "FILL-IN-THE-BLANK REQUEST TEMPLATE:

TASK: ________
STACK: ________
SCALE (MAU/QPS): ________
LATENCY TARGET: ________
COST SENSITIVE? (yes/no): ________
SECURITY/COMPLIANCE: ________
DATA SOURCES: ________
NON-GOALS: ________

OUTPUT REQUIRED: ________";

/// One-shot wrapper: a single worked example, ending where the task text
/// is appended by the composer.
pub const ONE_SHOT_WRAPPER: &str = "You will follow the style of this example.

EXAMPLE INPUT:
Design an auth system for a SaaS app.
Constraints: 100k MAU, React + Node + Postgres, SOC2-lite.

EXAMPLE OUTPUT:
Answer:
Use session cookies with rotating refresh tokens, server-side session store, and RBAC.
Reasoning Summary:
Cookies reduce token leakage; server-side sessions allow revocation; rotation limits exposure.
Trade-offs:
More infrastructure than pure JWT; better security.
Failure Modes:
CSRF if not protected; session store outages.
Production Checklist:
Secure cookie flags, CSRF tokens, rotation, audit logs, alerts.

NOW DO THIS TASK:";

/// Few-shot wrapper: two worked examples, ending where the task text is
/// appended by the composer.
pub const FEW_SHOT_WRAPPER: &str = "Follow the format and rigor of these examples.

EXAMPLE 1 INPUT:
Review adding caching to an API.
EXAMPLE 1 OUTPUT:
Answer:
Cache GET endpoints with TTL and explicit invalidation.
Reasoning Summary:
High hit-rate reduces DB load.
Trade-offs:
Potential staleness.
Failure Modes:
Stampede, stale reads.
Production Checklist:
Locking, metrics, fallback.

EXAMPLE 2 INPUT:
Design file upload pipeline.
EXAMPLE 2 OUTPUT:
Answer:
Signed URLs + async processing + virus scanning.
Reasoning Summary:
Offload bandwidth; isolate processing.
Trade-offs:
More components.
Failure Modes:
Orphan files, backlog.
Production Checklist:
Retries, DLQ, quotas, alerts.

NOW DO THIS TASK:";

/// Trailing instruction after the task text in one- and few-shot prompts.
pub const IMITATE_FORMAT: &str = "Use the same output format.";
