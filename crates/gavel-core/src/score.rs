//! Deterministic verdict scoring.

use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;
use crate::model::{Confidence, JudgmentRecord, Verdict};

/// Fixed `(verdict, confidence)` → score table.
///
/// The six entries are precomputed from `score(Pass, c) = weight(c)` and
/// `score(Fail, c) = 1 - weight(c)` with `weight(High) = 1.0`,
/// `weight(Medium) = 0.85`, `weight(Low) = 0.6`: a confident Fail scores
/// 0.0, an unconfident Fail drifts toward the middle of the range. Scores
/// are always one of these constants, never interpolated.
///
/// Individual entries can be overridden through deserialization; the
/// defaults are the normative table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub pass_high: f64,
    pub pass_medium: f64,
    pub pass_low: f64,
    pub fail_high: f64,
    pub fail_medium: f64,
    pub fail_low: f64,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            pass_high: 1.0,
            pass_medium: 0.85,
            pass_low: 0.6,
            fail_high: 0.0,
            fail_medium: 0.15,
            fail_low: 0.4,
        }
    }
}

impl ScoreTable {
    /// Score a validated record. Pure: the same record always maps to the
    /// same table constant. The closed enums make out-of-domain pairs
    /// unrepresentable, so this cannot fail.
    pub fn score(&self, record: &JudgmentRecord) -> f64 {
        match (record.verdict(), record.confidence()) {
            (Verdict::Pass, Confidence::High) => self.pass_high,
            (Verdict::Pass, Confidence::Medium) => self.pass_medium,
            (Verdict::Pass, Confidence::Low) => self.pass_low,
            (Verdict::Fail, Confidence::High) => self.fail_high,
            (Verdict::Fail, Confidence::Medium) => self.fail_medium,
            (Verdict::Fail, Confidence::Low) => self.fail_low,
        }
    }

    /// String-keyed lookup for callers holding a raw `verdict_confidence`
    /// key instead of a typed record. Unknown keys fail, they never panic.
    pub fn lookup(&self, key: &str) -> Result<f64, ScoreError> {
        match key {
            "pass_high" => Ok(self.pass_high),
            "pass_medium" => Ok(self.pass_medium),
            "pass_low" => Ok(self.pass_low),
            "fail_high" => Ok(self.fail_high),
            "fail_medium" => Ok(self.fail_medium),
            "fail_low" => Ok(self.fail_low),
            other => Err(ScoreError::UnknownKey(other.to_string())),
        }
    }

    /// Table key for a pair, e.g. `pass_high`.
    pub fn key_for(verdict: Verdict, confidence: Confidence) -> String {
        format!("{}_{}", verdict.key(), confidence.key())
    }
}
