//! End-to-end contract for the extraction pipeline and scorer: every output
//! shape a judge model actually produces, plus the failure modes callers are
//! expected to handle.

use gavel_core::errors::ExtractError;
use gavel_core::extract::Extractor;
use gavel_core::model::{Confidence, Verdict};
use gavel_core::score::ScoreTable;

#[test]
fn well_formed_json_object_extracts_directly() {
    let record = Extractor::default()
        .extract(r#"{"reasoning": "ok", "verdict": "Pass", "confidence": "High"}"#)
        .unwrap();
    assert_eq!(record.reasoning(), "ok");
    assert_eq!(record.verdict(), Verdict::Pass);
    assert_eq!(record.confidence(), Confidence::High);
}

#[test]
fn object_embedded_in_prose_is_recovered() {
    let record = Extractor::default()
        .extract("Here is my answer: {reasoning: 'good job', verdict: 'FAIL', confidence: 'medium'} thanks")
        .unwrap();
    assert_eq!(record.reasoning(), "good job");
    assert_eq!(record.verdict(), Verdict::Fail);
    assert_eq!(record.confidence(), Confidence::Medium);
}

#[test]
fn labeled_sections_split_at_label_boundaries() {
    let record = Extractor::default()
        .extract("Reasoning: it matches. Verdict: Pass. Confidence: High.")
        .unwrap();
    assert_eq!(record.reasoning(), "it matches.");
    assert_eq!(record.verdict(), Verdict::Pass);
    assert_eq!(record.confidence(), Confidence::High);
}

#[test]
fn unrecognizable_text_fails_with_no_match() {
    let err = Extractor::default().extract("I cannot decide.").unwrap_err();
    assert!(err.is_no_match());
}

#[test]
fn empty_input_fails_with_no_match() {
    let err = Extractor::default().extract("").unwrap_err();
    assert_eq!(err, ExtractError::NoMatch);
}

#[test]
fn empty_reasoning_is_rejected_not_passed_through() {
    let err = Extractor::default()
        .extract(r#"{"reasoning": "", "verdict": "Pass", "confidence": "High"}"#)
        .unwrap_err();
    assert_eq!(err, ExtractError::InvalidReasoning);
}

#[test]
fn invalid_verdict_and_confidence_are_distinguished() {
    let ex = Extractor::default();
    let err = ex
        .extract(r#"{"reasoning": "ok", "verdict": "abstain", "confidence": "High"}"#)
        .unwrap_err();
    assert_eq!(err, ExtractError::InvalidVerdict("abstain".to_string()));

    let err = ex
        .extract(r#"{"reasoning": "ok", "verdict": "Pass", "confidence": "certain"}"#)
        .unwrap_err();
    assert_eq!(err, ExtractError::InvalidConfidence("certain".to_string()));
}

#[test]
fn extra_keys_are_ignored() {
    let record = Extractor::default()
        .extract(
            r#"{"reasoning": "ok", "verdict": "Pass", "confidence": "High", "notes": "extra"}"#,
        )
        .unwrap();
    assert_eq!(
        record.to_json(),
        serde_json::json!({
            "reasoning": "ok",
            "verdict": "Pass",
            "confidence": "High"
        })
    );
}

#[test]
fn canonical_serialization_round_trips_through_extraction() {
    let ex = Extractor::default();
    let record = ex
        .extract(r#"{"reasoning": "ok", "verdict": "pass", "confidence": "LOW"}"#)
        .unwrap();
    let again = ex.extract(&record.to_json().to_string()).unwrap();
    assert_eq!(record, again);
}

#[test]
fn token_priority_is_uniform_across_strategies() {
    // A confidence naming both "low" and "high" resolves to Low in the
    // embedded-object path and the labeled-section path alike.
    let ex = Extractor::default();
    let embedded = ex
        .extract("{reasoning: 'r', verdict: 'pass', confidence: 'between low and high'}")
        .unwrap();
    assert_eq!(embedded.confidence(), Confidence::Low);

    let labeled = ex
        .extract("Reasoning: r. Verdict: pass. Confidence: between high and low.")
        .unwrap();
    assert_eq!(labeled.confidence(), Confidence::Low);
}

#[test]
fn partial_embedded_match_falls_through_to_labeled_sections() {
    // The braced blob resolves no judgment fields; the labeled sections
    // around it still do.
    let text = "Reasoning: solid derivation {steps: 4}. Verdict: pass. Confidence: high";
    let record = Extractor::default().extract(text).unwrap();
    assert_eq!(record.verdict(), Verdict::Pass);
    assert_eq!(record.confidence(), Confidence::High);
}

#[test]
fn extraction_and_scoring_compose() {
    let ex = Extractor::default();
    let table = ScoreTable::default();
    let record = ex
        .extract("Reasoning: partially correct. Verdict: fail. Confidence: medium")
        .unwrap();
    assert_eq!(table.score(&record), 0.15);
    // Pure: a second call over the same record is bit-identical.
    assert_eq!(table.score(&record), 0.15);
}
