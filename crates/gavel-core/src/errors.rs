//! Error taxonomy crossing the core boundary.
//!
//! Strategy-internal failures (malformed JSON, literal-parse errors) never
//! surface here; strategies convert them to no-match and the pipeline moves
//! on. Only the kinds below reach the caller.

use thiserror::Error;

/// Result type for extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Why a raw completion could not be turned into a judgment record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No strategy produced a candidate covering the required fields.
    /// Recoverable: the caller typically re-prompts the judge.
    #[error("no extraction strategy recognized a judgment in the raw output")]
    NoMatch,

    /// A candidate was found but its reasoning was missing, empty or
    /// whitespace-only.
    #[error("judgment reasoning is empty")]
    InvalidReasoning,

    /// A candidate was found but its verdict is not Pass/Fail.
    #[error("invalid verdict {0:?}: expected Pass or Fail")]
    InvalidVerdict(String),

    /// A candidate was found but its confidence is not High/Medium/Low.
    #[error("invalid confidence {0:?}: expected High, Medium or Low")]
    InvalidConfidence(String),
}

impl ExtractError {
    /// True when nothing recognizable was found, as opposed to a candidate
    /// that failed field validation.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    /// True when a candidate was found but one of its fields was invalid.
    pub fn is_invalid_field(&self) -> bool {
        !self.is_no_match()
    }

    /// Short stable name for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoMatch => "no_match",
            Self::InvalidReasoning => "invalid_reasoning",
            Self::InvalidVerdict(_) => "invalid_verdict",
            Self::InvalidConfidence(_) => "invalid_confidence",
        }
    }
}

/// Scoring failure for string-keyed lookups.
///
/// Unreachable through the typed API: [`ScoreTable::score`] matches
/// exhaustively over the closed enums. Only the string-keyed
/// [`ScoreTable::lookup`] path can observe it.
///
/// [`ScoreTable::score`]: crate::score::ScoreTable::score
/// [`ScoreTable::lookup`]: crate::score::ScoreTable::lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("unknown score key {0:?}")]
    UnknownKey(String),
}
