//! Core data model: verdicts, confidence levels, validated judgment records.

use serde::{Deserialize, Serialize};

use crate::errors::ExtractError;

/// Binary outcome of a judged evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Case-insensitive parse of a canonical token ("pass", "FAIL", "Pass").
    /// Trims surrounding whitespace; anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            Some(Verdict::Pass)
        } else if s.eq_ignore_ascii_case("fail") {
            Some(Verdict::Fail)
        } else {
            None
        }
    }

    /// Canonical capitalized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "Pass",
            Verdict::Fail => "Fail",
        }
    }

    /// Lowercase form used in score-table keys.
    pub fn key(&self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Fail => "fail",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Judge's self-reported certainty in its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Case-insensitive parse of a canonical token.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("high") {
            Some(Confidence::High)
        } else if s.eq_ignore_ascii_case("medium") {
            Some(Confidence::Medium)
        } else if s.eq_ignore_ascii_case("low") {
            Some(Confidence::Low)
        } else {
            None
        }
    }

    /// Canonical capitalized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }

    /// Lowercase form used in score-table keys.
    pub fn key(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated judgment produced by the extractor.
///
/// Construction through [`JudgmentRecord::new`] is the only way to obtain
/// one; it rejects empty or whitespace-only reasoning. The record is
/// immutable after construction and carries exactly these three fields;
/// extra keys found during extraction are dropped before this point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgmentRecord {
    reasoning: String,
    verdict: Verdict,
    confidence: Confidence,
}

impl JudgmentRecord {
    pub fn new(
        reasoning: impl Into<String>,
        verdict: Verdict,
        confidence: Confidence,
    ) -> Result<Self, ExtractError> {
        let reasoning = reasoning.into();
        if reasoning.trim().is_empty() {
            return Err(ExtractError::InvalidReasoning);
        }
        Ok(Self {
            reasoning,
            verdict,
            confidence,
        })
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Canonical JSON form: three keys, capitalized verdict and confidence.
    /// Feeding this back into the extractor reproduces the record.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// One completion returned by an [`LlmClient`](crate::providers::llm::LlmClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub meta: serde_json::Value,
}
