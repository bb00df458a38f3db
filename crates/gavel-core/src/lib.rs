//! Robust extraction and deterministic scoring of LLM judge verdicts.
//!
//! A judge model is asked to evaluate a student answer and reply with a
//! `{reasoning, verdict, confidence}` triple. Judges do not reliably comply
//! with the requested output shape, so [`extract::Extractor`] runs an ordered
//! strategy pipeline over the raw completion and either produces a validated
//! [`model::JudgmentRecord`] or fails with a typed [`errors::ExtractError`].
//! [`score::ScoreTable`] then maps the record to one of six fixed constants
//! in `[0.0, 1.0]`.
//!
//! The core is purely computational: no I/O, no shared mutable state. The
//! only async surface is the [`providers::llm::LlmClient`] seam consumed by
//! [`judge::Judge`]; transport, prompts and provider configuration stay with
//! the caller.

pub mod errors;
pub mod extract;
pub mod judge;
pub mod model;
pub mod providers;
pub mod score;
