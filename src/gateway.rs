//! Completion gateway — validates a request, routes it through the prompt
//! table and makes exactly one provider call.
//!
//! Provider failures are logged here and converted into
//! [`GatewayError::ProcessingFailure`]; nothing below this layer reaches
//! the HTTP caller except the error's message text.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::llm::{LlmProvider, ProviderError};
use crate::prompt::{self, Action};

// ── Request / result ─────────────────────────────────────────────────────────

/// Inbound request body for `POST /api/chatgpt`.
///
/// Every field is optional at the wire level; [`Gateway::handle`] enforces
/// which ones are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

impl CompletionRequest {
    pub fn new(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            action: Some(action.into()),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_custom_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(prompt.into());
        self
    }
}

/// Successful completion as returned to the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub success: bool,
    pub response: String,
    pub token_usage: u64,
}

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GatewayError {
    /// `text` or `action` missing or empty.
    #[error("Missing required parameters")]
    InvalidRequest,
    /// The provider call failed for any reason.
    #[error("Failed to process request")]
    ProcessingFailure(#[source] ProviderError),
}

impl GatewayError {
    /// Underlying failure message, if any, safe to show to the caller.
    pub fn detail(&self) -> Option<&str> {
        match self {
            GatewayError::InvalidRequest => None,
            GatewayError::ProcessingFailure(e) => Some(e.message()),
        }
    }
}

// ── Gateway ──────────────────────────────────────────────────────────────────

/// Shared, immutable request handler. Built once at startup.
#[derive(Debug, Clone)]
pub struct Gateway {
    provider: LlmProvider,
}

impl Gateway {
    pub fn new(provider: LlmProvider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &LlmProvider {
        &self.provider
    }

    pub async fn handle(&self, req: CompletionRequest) -> Result<CompletionResult, GatewayError> {
        let text = required(req.text.as_deref()).ok_or(GatewayError::InvalidRequest)?;
        let tag = required(req.action.as_deref()).ok_or(GatewayError::InvalidRequest)?;

        let action = Action::from_tag(tag);
        let pair = prompt::build_prompt(
            action,
            text,
            req.language.as_deref(),
            req.custom_prompt.as_deref(),
        );

        debug!(action = action.as_str(), tag, text_len = text.len(), "routing completion request");

        match self.provider.complete(&pair.system, &pair.user).await {
            Ok(reply) => Ok(CompletionResult {
                success: true,
                token_usage: reply.total_tokens(),
                response: reply.text,
            }),
            Err(e) => {
                error!(
                    action = action.as_str(),
                    provider = self.provider.name(),
                    model = self.provider.model(),
                    error = %e,
                    "completion failed"
                );
                Err(GatewayError::ProcessingFailure(e))
            }
        }
    }
}

fn required(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::providers::dummy::DummyProvider;
    use crate::llm::providers::openai_compatible::OpenAiCompatibleProvider;

    fn dummy_gateway() -> Gateway {
        Gateway::new(LlmProvider::Dummy(DummyProvider))
    }

    /// Provider pointed at a closed local port — every call fails in transport.
    fn unreachable_gateway() -> Gateway {
        let p = OpenAiCompatibleProvider::new(
            "http://127.0.0.1:1/v1/chat/completions".into(),
            "test-model".into(),
            1000,
            None,
            2,
            None,
        )
        .unwrap();
        Gateway::new(LlmProvider::OpenAiCompatible(p))
    }

    #[tokio::test]
    async fn missing_text_is_invalid() {
        let req = CompletionRequest { action: Some("explain".into()), ..Default::default() };
        assert!(matches!(dummy_gateway().handle(req).await, Err(GatewayError::InvalidRequest)));
    }

    #[tokio::test]
    async fn missing_action_is_invalid() {
        let req = CompletionRequest { text: Some("hi".into()), ..Default::default() };
        assert!(matches!(dummy_gateway().handle(req).await, Err(GatewayError::InvalidRequest)));
    }

    #[tokio::test]
    async fn empty_fields_are_invalid() {
        let err = dummy_gateway().handle(CompletionRequest::new("", "explain")).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest));
        assert_eq!(err.to_string(), "Missing required parameters");
        assert!(err.detail().is_none());

        let err = dummy_gateway().handle(CompletionRequest::new("hi", "")).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest));
    }

    #[tokio::test]
    async fn invalid_request_skips_provider() {
        // An unreachable provider would turn into ProcessingFailure if called.
        let err = unreachable_gateway().handle(CompletionRequest::default()).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest));
    }

    #[tokio::test]
    async fn success_wraps_provider_reply() {
        let res = dummy_gateway()
            .handle(CompletionRequest::new("hi", "translate"))
            .await
            .unwrap();
        assert!(res.success);
        assert_eq!(res.response, "[echo] Translate the following text to English: hi");
        assert_eq!(res.token_usage, 0);
    }

    #[tokio::test]
    async fn custom_prompt_reaches_provider() {
        let res = dummy_gateway()
            .handle(CompletionRequest::new("hi", "custom").with_custom_prompt("Rhyme with"))
            .await
            .unwrap();
        assert_eq!(res.response, "[echo] Rhyme with: hi");
    }

    #[tokio::test]
    async fn unrecognized_action_passes_validation() {
        let res = dummy_gateway().handle(CompletionRequest::new("raw", "foo")).await.unwrap();
        assert_eq!(res.response, "[echo] raw");
    }

    #[tokio::test]
    async fn provider_failure_becomes_processing_failure() {
        let err = unreachable_gateway()
            .handle(CompletionRequest::new("hi", "explain"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to process request");
        assert!(matches!(err, GatewayError::ProcessingFailure(_)));
        assert!(!err.detail().unwrap_or_default().is_empty());
    }

    #[test]
    fn result_serializes_camel_case() {
        let r = CompletionResult { success: true, response: "ok".into(), token_usage: 42 };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v, serde_json::json!({"success": true, "response": "ok", "tokenUsage": 42}));
    }

    #[test]
    fn request_deserializes_camel_case() {
        let req: CompletionRequest = serde_json::from_str(
            r#"{"text":"t","action":"custom","customPrompt":"Do","language":null,"extra":1}"#,
        )
        .unwrap();
        assert_eq!(req.custom_prompt.as_deref(), Some("Do"));
        assert!(req.language.is_none());
    }
}
