//! Judge-call seam: one completion, extracted and scored.
//!
//! Prompt construction, provider selection and transport retries stay with
//! the caller; this module only packages the completion, extraction and
//! scoring steps behind a single call.

use std::sync::Arc;

use crate::extract::Extractor;
use crate::model::JudgmentRecord;
use crate::providers::llm::LlmClient;
use crate::score::ScoreTable;

/// Scored result of one judge call.
#[derive(Debug, Clone)]
pub struct JudgeOutcome {
    pub record: JudgmentRecord,
    pub score: f64,
    /// Raw completion the record was extracted from, kept for audit trails.
    pub raw: String,
}

/// Composes a completion client, an extraction pipeline and a score table.
pub struct Judge {
    client: Arc<dyn LlmClient>,
    extractor: Extractor,
    table: ScoreTable,
}

impl Judge {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            extractor: Extractor::default(),
            table: ScoreTable::default(),
        }
    }

    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_table(mut self, table: ScoreTable) -> Self {
        self.table = table;
        self
    }

    /// Run one evaluation: complete, extract, score.
    ///
    /// Extraction failures are a normal, recoverable outcome; they cross
    /// this boundary as [`ExtractError`](crate::errors::ExtractError) values
    /// downcastable from the returned error, so callers can distinguish
    /// "nothing recognizable" from "found but invalid" when deciding whether
    /// to re-prompt.
    pub async fn evaluate(
        &self,
        prompt: &str,
        system: Option<&[String]>,
    ) -> anyhow::Result<JudgeOutcome> {
        let resp = self.client.complete(prompt, system).await?;
        tracing::debug!(
            provider = resp.provider.as_str(),
            model = resp.model.as_str(),
            "judge completion received"
        );

        let record = match self.extractor.extract(&resp.text) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(kind = err.kind(), "judgment extraction failed");
                return Err(err.into());
            }
        };

        let score = self.table.score(&record);
        Ok(JudgeOutcome {
            record,
            score,
            raw: resp.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExtractError;
    use crate::model::{Confidence, LlmResponse, Verdict};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockLlmClient {
        responses: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(
            &self,
            _prompt: &str,
            _system: Option<&[String]>,
        ) -> anyhow::Result<LlmResponse> {
            let mut resps = self.responses.lock().unwrap();
            if resps.is_empty() {
                anyhow::bail!("no more mock responses");
            }
            let text = resps.remove(0);
            Ok(LlmResponse {
                text,
                provider: "mock".to_string(),
                model: "mock".to_string(),
                cached: false,
                meta: serde_json::Value::Null,
            })
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }

    fn judge_with(responses: Vec<&str>) -> Judge {
        Judge::new(Arc::new(MockLlmClient {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
        }))
    }

    #[tokio::test]
    async fn evaluate_scores_a_clean_json_verdict() {
        let judge = judge_with(vec![
            r#"{"reasoning": "matches the rubric", "verdict": "Pass", "confidence": "Medium"}"#,
        ]);
        let outcome = judge.evaluate("prompt", None).await.unwrap();
        assert_eq!(outcome.record.verdict(), Verdict::Pass);
        assert_eq!(outcome.record.confidence(), Confidence::Medium);
        assert_eq!(outcome.score, 0.85);
    }

    #[tokio::test]
    async fn evaluate_recovers_prose_wrapped_verdicts() {
        let judge = judge_with(vec![
            "Sure! Here's my evaluation: {reasoning: 'missed the point', verdict: 'fail', confidence: 'low'} hope that helps",
        ]);
        let outcome = judge.evaluate("prompt", None).await.unwrap();
        assert_eq!(outcome.record.verdict(), Verdict::Fail);
        assert_eq!(outcome.score, 0.4);
        assert!(outcome.raw.starts_with("Sure!"));
    }

    #[tokio::test]
    async fn evaluate_surfaces_extraction_failure_as_typed_error() {
        let judge = judge_with(vec!["I cannot decide."]);
        let err = judge.evaluate("prompt", None).await.unwrap_err();
        let extract_err = err.downcast_ref::<ExtractError>().unwrap();
        assert!(extract_err.is_no_match());
    }

    #[tokio::test]
    async fn evaluate_propagates_client_errors() {
        let judge = judge_with(vec![]);
        let err = judge.evaluate("prompt", None).await.unwrap_err();
        assert!(err.downcast_ref::<ExtractError>().is_none());
    }
}
