//! Action-keyed prompt router.
//!
//! Maps an action tag plus the caller's text onto a system/user message
//! pair. Pure — no I/O, no config.
//!
//! | action      | persona                | user message                                   |
//! |-------------|------------------------|------------------------------------------------|
//! | `explain`   | technical expert       | `Please explain the following text: {text}`    |
//! | `summarize` | summarizer             | `Please summarize the following text: {text}`  |
//! | `translate` | translator             | `Translate the following text to {lang}: {text}` |
//! | `custom`    | generic assistant      | `{customPrompt}: {text}`                       |
//! | other       | generic assistant      | `{text}`                                       |

pub const EXPLAIN_SYSTEM: &str =
    "You are a helpful technical expert. Explain concepts clearly and provide examples when useful.";
pub const SUMMARIZE_SYSTEM: &str =
    "You are a skilled summarizer. Keep summaries concise and focused on the key points.";
pub const TRANSLATE_SYSTEM: &str =
    "You are a professional translator. Preserve the original meaning of the text.";
pub const GENERIC_SYSTEM: &str = "You are a helpful assistant.";

pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_CUSTOM_PROMPT: &str = "Please analyze";

/// Requested text transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Explain,
    Summarize,
    Translate,
    Custom,
    /// Any tag outside the known set. Routed to the generic persona with
    /// the text passed through unchanged.
    Unrecognized,
}

impl Action {
    /// Case-sensitive tag lookup. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "explain" => Action::Explain,
            "summarize" => Action::Summarize,
            "translate" => Action::Translate,
            "custom" => Action::Custom,
            _ => Action::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Explain => "explain",
            Action::Summarize => "summarize",
            Action::Translate => "translate",
            Action::Custom => "custom",
            Action::Unrecognized => "unrecognized",
        }
    }
}

/// System instruction plus user message for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Build the prompt pair for `action`.
///
/// `language` applies to [`Action::Translate`] only and `custom_prompt` to
/// [`Action::Custom`] only; absent or empty values fall back to
/// [`DEFAULT_LANGUAGE`] / [`DEFAULT_CUSTOM_PROMPT`].
pub fn build_prompt(
    action: Action,
    text: &str,
    language: Option<&str>,
    custom_prompt: Option<&str>,
) -> PromptPair {
    let (system, user) = match action {
        Action::Explain => (EXPLAIN_SYSTEM, format!("Please explain the following text: {text}")),
        Action::Summarize => (SUMMARIZE_SYSTEM, format!("Please summarize the following text: {text}")),
        Action::Translate => {
            let language = non_empty(language).unwrap_or(DEFAULT_LANGUAGE);
            (TRANSLATE_SYSTEM, format!("Translate the following text to {language}: {text}"))
        }
        Action::Custom => {
            let instruction = non_empty(custom_prompt).unwrap_or(DEFAULT_CUSTOM_PROMPT);
            (GENERIC_SYSTEM, format!("{instruction}: {text}"))
        }
        Action::Unrecognized => (GENERIC_SYSTEM, text.to_string()),
    };
    PromptPair { system: system.to_string(), user }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}
