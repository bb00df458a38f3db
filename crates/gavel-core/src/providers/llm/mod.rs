//! LLM provider boundary.

use async_trait::async_trait;

use crate::model::LlmResponse;

/// A judge-capable completion client.
///
/// Implementations own every transport concern: HTTP, credentials,
/// timeouts, retries. The core only ever consumes the completion text the
/// client eventually produces.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Complete `prompt`, optionally under one or more system prompts.
    async fn complete(&self, prompt: &str, system: Option<&[String]>)
        -> anyhow::Result<LlmResponse>;

    /// Stable provider identifier for logs.
    fn provider_name(&self) -> &'static str;
}
