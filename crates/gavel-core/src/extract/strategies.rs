//! Built-in extraction strategies, in pipeline order.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use super::literal;
use super::{Candidate, ExtractStrategy};
use crate::model::{Confidence, Verdict};

lazy_static! {
    /// First flat brace-delimited blob (no nested braces).
    static ref OBJECT_BLOB: Regex = Regex::new(r"\{[^{}]*\}").unwrap();
    /// Leading list markers (digits, dots, dashes, bullets, asterisks) at line starts.
    static ref LIST_MARKERS: Regex = Regex::new(r"(?m)^[\d.\-•*]+\s*").unwrap();
    /// Labeled sections: each runs up to the next label; confidence runs to end.
    static ref REASONING_SECTION: Regex = Regex::new(r"(?is)reasoning:(.*?)verdict:").unwrap();
    static ref VERDICT_SECTION: Regex = Regex::new(r"(?is)verdict:(.*?)confidence:").unwrap();
    static ref CONFIDENCE_SECTION: Regex = Regex::new(r"(?is)confidence:(.*)").unwrap();
}

/// First canonical verdict token found anywhere in `value`, case-insensitive.
/// Search order is Pass, then Fail; a value naming both resolves to Pass.
fn match_verdict(value: &str) -> Option<Verdict> {
    let lower = value.to_lowercase();
    [Verdict::Pass, Verdict::Fail]
        .into_iter()
        .find(|v| lower.contains(v.key()))
}

/// Same substring search for confidence. Search order is Low, then Medium,
/// then High, uniformly across strategies, so a value naming several levels
/// always resolves to the same one.
fn match_confidence(value: &str) -> Option<Confidence> {
    let lower = value.to_lowercase();
    [Confidence::Low, Confidence::Medium, Confidence::High]
        .into_iter()
        .find(|c| lower.contains(c.key()))
}

/// Stringify a candidate value for token search.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Strategy 1: the whole completion is already a JSON object.
///
/// Keys are taken as-is (case-sensitive); the pipeline's required-key check
/// decides whether the object qualifies.
pub struct DirectJson;

impl ExtractStrategy for DirectJson {
    fn name(&self) -> &'static str {
        "direct_json"
    }

    fn try_extract(&self, raw: &str) -> Option<Candidate> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        }
    }
}

/// Strategy 2: first flat `{...}` blob inside surrounding prose, parsed
/// leniently (JSON or Python-literal dialect). Keys are lowercased for
/// lookup; verdict and confidence values are resolved by substring search
/// against the canonical tokens and unresolved fields are omitted, so a
/// blob that only half-parses falls through to the next strategy.
pub struct EmbeddedObject;

impl ExtractStrategy for EmbeddedObject {
    fn name(&self) -> &'static str {
        "embedded_object"
    }

    fn try_extract(&self, raw: &str) -> Option<Candidate> {
        let blob = OBJECT_BLOB.find(raw)?;
        let parsed = literal::parse_flat_object(blob.as_str())?;
        let lowered: Map<String, Value> = parsed
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        let mut out = Map::new();
        if let Some(reasoning) = lowered.get("reasoning").filter(|v| !v.is_null()) {
            out.insert("reasoning".to_string(), reasoning.clone());
        }
        if let Some(verdict) = lowered
            .get("verdict")
            .and_then(|v| match_verdict(&value_text(v)))
        {
            out.insert(
                "verdict".to_string(),
                Value::String(verdict.as_str().to_string()),
            );
        }
        if let Some(confidence) = lowered
            .get("confidence")
            .and_then(|v| match_confidence(&value_text(v)))
        {
            out.insert(
                "confidence".to_string(),
                Value::String(confidence.as_str().to_string()),
            );
        }

        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

/// Strategy 3: free prose with `Reasoning: ... Verdict: ... Confidence: ...`
/// sections in that order. Labels match case-insensitively; the extracted
/// reasoning keeps its original casing. Succeeds only when all three
/// sections resolve.
pub struct LabeledSections;

impl ExtractStrategy for LabeledSections {
    fn name(&self) -> &'static str {
        "labeled_sections"
    }

    fn try_extract(&self, raw: &str) -> Option<Candidate> {
        let reasoning = section(&REASONING_SECTION, raw).map(|text| {
            let cleaned = clean_section(&text);
            // One leading colon artifact survives double labels ("Reasoning:: ...").
            match cleaned.strip_prefix(':') {
                Some(rest) => rest.trim().to_string(),
                None => cleaned,
            }
        })?;
        if reasoning.is_empty() {
            return None;
        }
        let verdict =
            section(&VERDICT_SECTION, raw).and_then(|text| match_verdict(&clean_section(&text)))?;
        let confidence = section(&CONFIDENCE_SECTION, raw)
            .and_then(|text| match_confidence(&clean_section(&text)))?;

        let mut out = Map::new();
        out.insert("reasoning".to_string(), Value::String(reasoning));
        out.insert(
            "verdict".to_string(),
            Value::String(verdict.as_str().to_string()),
        );
        out.insert(
            "confidence".to_string(),
            Value::String(confidence.as_str().to_string()),
        );
        Some(out)
    }
}

fn section(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Strip leading list markers per line, drop quote characters, trim.
fn clean_section(text: &str) -> String {
    LIST_MARKERS
        .replace_all(text, "")
        .replace('"', "")
        .trim()
        .to_string()
}
