use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 16000;
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Connection and sampling settings for the chat-completion API.
///
/// Built once at startup and handed to the client; the same values are used
/// for every request the process makes.
///
/// | Variable          | Default                  | Purpose                 |
/// |-------------------|--------------------------|-------------------------|
/// | `OPENAI_API_KEY`  | (required)               | Bearer token            |
/// | `OPENAI_BASE_URL` | `https://api.openai.com` | Any compatible server   |
/// | `OPENAI_MODEL`    | `gpt-4o-mini`            | Model identifier        |
#[derive(Clone, PartialEq)]
pub struct ChatConfig {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl ChatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: 0.0,
        }
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or_else(|| {
            DomainError::configuration(format!("{API_KEY_VAR} is not set"))
        })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = non_empty(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        if let Some(model) = non_empty(MODEL_VAR) {
            config = config.with_model(model);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Full chat-completion URL (base + `/v1/chat/completions`).
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }
}

// The key never ends up in logs.
impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}
