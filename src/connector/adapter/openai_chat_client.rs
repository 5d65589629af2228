use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::application::ChatClient;
use crate::domain::{ChatConfig, DomainError};

/// Chat Completions API request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the Chat Completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for the OpenAI Chat Completions API and compatible servers.
///
/// Issues exactly one `POST` per [`ChatClient::complete`] call and waits for
/// the whole body. There is no retry and no timeout beyond reqwest's defaults.
/// Every failure is logged with what is known about it (status, headers and
/// body for HTTP errors; the outgoing request for transport errors) before
/// being returned.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    config: ChatConfig,
    url: String,
}

impl OpenAiChatClient {
    pub fn new(config: ChatConfig) -> Self {
        let url = config.endpoint();
        Self {
            client: reqwest::Client::new(),
            config,
            url,
        }
    }

    fn send_error(&self, e: reqwest::Error) -> DomainError {
        let detail = error_chain(&e);
        if e.is_builder() {
            error!("Error in setting up request: {detail}");
            DomainError::request_setup(detail)
        } else if e.is_connect() || e.is_timeout() || e.is_request() {
            error!("No response received from API: POST {}: {detail}", self.url);
            DomainError::network(format!("POST {}: {detail}", self.url))
        } else {
            error!("Unexpected error calling API: {detail}");
            DomainError::network(detail)
        }
    }

    fn parse_response(body: &str) -> Result<String, DomainError> {
        let api_response: ApiResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::malformed(format!("failed to parse response: {e}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| DomainError::malformed("response contained no choices"))
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: self.config.model(),
            messages: [
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.config.max_tokens(),
            temperature: self.config.temperature(),
        };

        debug!("POST {} (model {})", self.url, self.config.model());

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key()))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            error!("Error response from API: {body}");
            error!("Status code: {status}");
            error!("Headers: {headers:?}");
            return Err(DomainError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| {
            let detail = error_chain(&e);
            error!("Failed to read API response body: {detail}");
            DomainError::network(format!("failed to read response body: {detail}"))
        })?;

        Self::parse_response(&body).inspect_err(|e| {
            error!("{e}: {body}");
        })
    }
}

/// `Display` of an error followed by each of its sources, joined with `: `.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_takes_first_choice_verbatim() {
        let body = r#"{"choices":[
            {"message":{"role":"assistant","content":"  struct A;\n"}},
            {"message":{"role":"assistant","content":"struct B;"}}
        ]}"#;
        assert_eq!(
            OpenAiChatClient::parse_response(body).unwrap(),
            "  struct A;\n"
        );
    }

    #[test]
    fn parse_response_rejects_empty_choices() {
        let err = OpenAiChatClient::parse_response(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn parse_response_rejects_non_json() {
        let err = OpenAiChatClient::parse_response("<html>gateway</html>").unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn request_serializes_expected_shape() {
        let request = ApiRequest {
            model: "gpt-4o-mini",
            messages: [
                ApiMessage {
                    role: "system",
                    content: "sys",
                },
                ApiMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            max_tokens: 16000,
            temperature: 0.0,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ],
                "max_tokens": 16000,
                "temperature": 0.0
            })
        );
    }

    #[test]
    fn error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "permission denied");
        let outer = DomainError::read("input.rs", inner);
        assert_eq!(
            error_chain(&outer),
            "Failed to read input.rs: permission denied"
        );
    }

    #[test]
    fn endpoint_comes_from_config() {
        let client = OpenAiChatClient::new(
            ChatConfig::new("sk-test").with_base_url("http://127.0.0.1:9/"),
        );
        assert_eq!(client.url, "http://127.0.0.1:9/v1/chat/completions");
    }
}
