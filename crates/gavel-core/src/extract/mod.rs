//! Ordered-strategy extraction pipeline.
//!
//! LLM judges do not reliably emit the structure they were asked for. The
//! extractor runs a fixed, ordered list of strategies over the raw completion
//! text; the first strategy whose candidate covers every required key wins
//! and is validated into a [`JudgmentRecord`]. Candidates from different
//! strategies are never merged. Strategies themselves never raise: anything
//! a strategy cannot handle is a no-match, and the pipeline moves on.
//!
//! Validation failures of the winning candidate are final. A strategy that
//! resolves only part of a judgment omits the unresolved keys, does not win,
//! and the pipeline falls through to the next strategy instead.

mod literal;
mod strategies;

pub use strategies::{DirectJson, EmbeddedObject, LabeledSections};

use serde_json::{Map, Value};

use crate::errors::{ExtractError, ExtractResult};
use crate::model::{Confidence, JudgmentRecord, Verdict};

/// Raw key/value candidate produced by a single strategy, before validation.
pub type Candidate = Map<String, Value>;

/// One self-contained algorithm for recovering a judgment from raw text.
///
/// Implementations return `None` both for "this text is not in my shape" and
/// for internal parse failures; errors never escape a strategy.
pub trait ExtractStrategy: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Attempt to recover a candidate from `raw`.
    fn try_extract(&self, raw: &str) -> Option<Candidate>;
}

/// Keys a candidate must cover when none are configured.
pub const REQUIRED_KEYS: [&str; 3] = ["reasoning", "verdict", "confidence"];

/// The strategy pipeline. Strategies are injected at construction and run in
/// order; there is no process-wide registry.
pub struct Extractor {
    strategies: Vec<Box<dyn ExtractStrategy>>,
    required_keys: Vec<String>,
}

impl Default for Extractor {
    /// The built-in pipeline: direct JSON parse, embedded object, labeled
    /// sections.
    fn default() -> Self {
        Self::new(vec![
            Box::new(DirectJson),
            Box::new(EmbeddedObject),
            Box::new(LabeledSections),
        ])
    }
}

impl Extractor {
    /// Build an extractor from an explicit, ordered strategy list.
    pub fn new(strategies: Vec<Box<dyn ExtractStrategy>>) -> Self {
        Self {
            strategies,
            required_keys: REQUIRED_KEYS.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// Append a caller-provided strategy. It runs after the strategies
    /// already installed, so built-ins keep priority.
    pub fn with_strategy(mut self, strategy: Box<dyn ExtractStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Override the keys a candidate must cover to count as a match.
    /// Validation still expects the reasoning/verdict/confidence triple.
    pub fn with_required_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Run the pipeline over `raw`.
    ///
    /// Returns the validated record from the first covering candidate, or
    /// [`ExtractError::NoMatch`] when no strategy recognized anything. A
    /// covering candidate that fails field validation returns that field's
    /// error; it does not fall through.
    pub fn extract(&self, raw: &str) -> ExtractResult<JudgmentRecord> {
        for strategy in &self.strategies {
            let Some(candidate) = strategy.try_extract(raw) else {
                continue;
            };
            if candidate.is_empty() || !self.covers_required(&candidate) {
                continue;
            }
            tracing::debug!(strategy = strategy.name(), "extraction strategy matched");
            return validate(&candidate);
        }
        Err(ExtractError::NoMatch)
    }

    fn covers_required(&self, candidate: &Candidate) -> bool {
        self.required_keys
            .iter()
            .all(|key| matches!(candidate.get(key), Some(v) if !v.is_null()))
    }
}

/// Validate a winning candidate into an immutable record.
fn validate(candidate: &Candidate) -> ExtractResult<JudgmentRecord> {
    let reasoning = candidate
        .get("reasoning")
        .and_then(Value::as_str)
        .ok_or(ExtractError::InvalidReasoning)?;

    let verdict_raw = field_text(candidate, "verdict");
    let verdict = Verdict::parse(&verdict_raw)
        .ok_or_else(|| ExtractError::InvalidVerdict(verdict_raw.clone()))?;

    let confidence_raw = field_text(candidate, "confidence");
    let confidence = Confidence::parse(&confidence_raw)
        .ok_or_else(|| ExtractError::InvalidConfidence(confidence_raw.clone()))?;

    JudgmentRecord::new(reasoning, verdict, confidence)
}

fn field_text(candidate: &Candidate, key: &str) -> String {
    match candidate.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
