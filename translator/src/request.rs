//! Chat-completion request assembly.
//!
//! Nothing here touches the network; the result is handed to a
//! [`crate::transport::ChatTransport`].

use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use serde::Serialize;

use crate::error::TranslationError;
use crate::prompt::PromptPair;

/// Path appended to the configured API base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

const MAX_TOKENS: u32 = 2000;

/// Streaming chat-completion request body.
///
/// Decoding parameters are fixed integers so they serialize as `0` / `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub temperature: u32,
    pub max_tokens: u32,
    pub top_p: u32,
    pub frequency_penalty: u32,
    pub presence_penalty: u32,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

impl ChatCompletionRequest {
    /// System prompt, then the mode instruction, then the quoted text.
    pub fn new(model: &str, prompts: &PromptPair, text: &str) -> Self {
        Self {
            model: model.to_string(),
            temperature: 0,
            max_tokens: MAX_TOKENS,
            top_p: 1,
            frequency_penalty: 1,
            presence_penalty: 1,
            messages: vec![
                ChatMessage::new("system", prompts.system_prompt.as_str()),
                ChatMessage::new("user", prompts.assistant_prompt.as_str()),
                ChatMessage::new("user", format!("\"{text}\"")),
            ],
            stream: true,
        }
    }
}

/// Full endpoint URL for an API base such as `https://api.openai.com`.
pub fn endpoint_url(api_url: &str) -> String {
    let base = api_url.strip_suffix('/').unwrap_or(api_url);
    format!("{base}{CHAT_COMPLETIONS_PATH}")
}

/// JSON content type plus bearer authorization.
pub fn request_headers(api_key: &str) -> Result<HeaderMap, TranslationError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
        .map_err(|e| TranslationError::InvalidConfig(format!("API key is not a valid header: {e}")))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::TranslateMode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn body_serializes_with_fixed_parameters() {
        let prompts = PromptPair::for_query(TranslateMode::Translate, "en", "fr");
        let body = ChatCompletionRequest::new("gpt-3.5-turbo", &prompts, "Hello");

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-3.5-turbo",
                "temperature": 0,
                "max_tokens": 2000,
                "top_p": 1,
                "frequency_penalty": 1,
                "presence_penalty": 1,
                "messages": [
                    {
                        "role": "system",
                        "content": "You are a translation engine that can only translate text and cannot interpret it.",
                    },
                    { "role": "user", "content": "translate from English to French" },
                    { "role": "user", "content": "\"Hello\"" },
                ],
                "stream": true,
            })
        );
    }

    #[test]
    fn endpoint_appends_fixed_suffix() {
        assert_eq!(
            endpoint_url("https://api.openai.com"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            endpoint_url("http://localhost:11434/"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn headers_carry_bearer_token() {
        let headers = request_headers("sk-test").unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer sk-test");
    }

    #[test]
    fn headers_reject_control_characters_in_key() {
        assert!(matches!(
            request_headers("sk-\nbad"),
            Err(TranslationError::InvalidConfig(_))
        ));
    }
}
