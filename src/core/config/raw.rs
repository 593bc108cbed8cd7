//! Raw TOML deserialization types.
//!
//! These structs mirror the TOML file shape and use `serde` defaults.
//! The `load` module converts them into the public `types` structs.

use serde::Deserialize;

// ── Top-level ────────────────────────────────────────────────────────────────

/// Raw TOML shape — serde target before resolution.
#[derive(Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub server: RawServer,
    #[serde(default)]
    pub logging: RawLogging,
    #[serde(default)]
    pub llm: RawLlm,
}

// ── Server ──────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawServer {
    #[serde(default = "default_bind_host")]
    pub bind_host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub public_host: Option<String>,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            public_host: None,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

// ── Logging ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawLogging {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for RawLogging {
    fn default() -> Self {
        Self { log_level: default_log_level(), log_file: None }
    }
}

// ── LLM ─────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawLlm {
    /// Maps to `default = "..."` in `[llm]`.
    #[serde(rename = "default", default = "default_llm_provider")]
    pub provider: String,
    #[serde(default)]
    pub openai: RawOpenAiConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider(), openai: RawOpenAiConfig::default() }
    }
}

#[derive(Deserialize)]
pub(super) struct RawOpenAiConfig {
    #[serde(default = "default_openai_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default = "default_openai_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for RawOpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_openai_api_base_url(),
            model: default_openai_model(),
            max_tokens: default_openai_max_tokens(),
            temperature: None,
            timeout_seconds: default_openai_timeout_seconds(),
        }
    }
}

// ── Defaults ────────────────────────────────────────────────────────────────

pub(super) fn default_bind_host() -> String { "0.0.0.0".to_string() }
pub(super) fn default_port() -> u16 { 3000 }
pub(super) fn default_max_body_bytes() -> usize { 100 * 1024 }
pub(super) fn default_log_level() -> String { "info".to_string() }
pub(super) fn default_llm_provider() -> String { "openai".to_string() }
pub(super) fn default_openai_api_base_url() -> String { "https://api.openai.com/v1/chat/completions".to_string() }
pub(super) fn default_openai_model() -> String { "gpt-3.5-turbo".to_string() }
pub(super) fn default_openai_max_tokens() -> u32 { 1000 }
pub(super) fn default_openai_timeout_seconds() -> u64 { 600 }
