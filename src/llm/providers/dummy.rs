//! Dummy LLM provider — echoes the user prompt back prefixed with `[echo]`.
//! Used for local runs and tests without a real API key.

use crate::llm::{LlmResponse, ProviderError};

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, _system: &str, user: &str) -> Result<LlmResponse, ProviderError> {
        Ok(LlmResponse { text: format!("[echo] {user}"), usage: None })
    }
}
