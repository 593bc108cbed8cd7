//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or the path given with `-f`), then applies `PORT`, `DOMAIN`,
//! `OPENAI_API_KEY` and `RELAY_LOG_LEVEL` env overrides.
//!
//! # Module layout
//!
//! - **types** — Public configuration structs (`Config`, `ServerConfig`,
//!   `LlmConfig`, …).
//! - **raw** — Raw TOML deserialization types. These mirror the file shape
//!   and use serde defaults; kept private.
//! - **load** — Loading logic: `merge_toml`, `load_raw_merged`, `load`,
//!   `load_from`, `expand_home`.

mod load;
mod raw;
mod types;

pub use load::{expand_home, load, load_from, EnvOverrides};
pub use types::*;

impl Config {
    /// Safe `Config` for tests — dummy LLM, no API key, ephemeral port.
    pub fn test_default() -> Self {
        Self {
            server: ServerConfig {
                bind_host: "127.0.0.1".into(),
                port: 0,
                public_host: None,
                max_body_bytes: raw::default_max_body_bytes(),
            },
            logging: LoggingConfig { log_level: "info".into(), log_file: None },
            llm: LlmConfig {
                provider: "dummy".into(),
                openai: OpenAiConfig {
                    api_base_url: "http://localhost:0/v1/chat/completions".into(),
                    model: "test-model".into(),
                    max_tokens: raw::default_openai_max_tokens(),
                    temperature: None,
                    timeout_seconds: 1,
                },
            },
            llm_api_key: None,
        }
    }
}
