//! Streaming HTTP transport.
//!
//! A [`ChatTransport`] performs the request and yields the raw `data` payload
//! of every server-sent event. The relay never sees HTTP framing.

use async_trait::async_trait;
use eventsource_stream::EventStreamError;
use eventsource_stream::Eventsource;
use futures::StreamExt;
use futures::future;
use futures::stream::BoxStream;
use reqwest::Client;
use reqwest::Method;
use reqwest::header::ACCEPT;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use tracing::debug;
use tracing::warn;

use crate::error::TranslationError;

/// Raw event payloads, in arrival order.
pub type EventStream = BoxStream<'static, Result<String, TranslationError>>;

/// Everything needed to issue one streaming request.
#[derive(Debug, Clone)]
pub struct StreamRequest {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: String,
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send the request and return its event stream once headers arrive.
    ///
    /// Dropping the returned stream aborts the request.
    async fn open(&self, request: StreamRequest) -> Result<EventStream, TranslationError>;
}

/// Server-sent-events transport over `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct SseTransport {
    client: Client,
}

impl SseTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatTransport for SseTransport {
    async fn open(&self, request: StreamRequest) -> Result<EventStream, TranslationError> {
        let StreamRequest {
            url,
            method,
            headers,
            body,
        } = request;

        debug!(%url, %method, "opening event stream");
        let response = self
            .client
            .request(method, &url)
            .headers(headers)
            .header(ACCEPT, HeaderValue::from_static("text/event-stream"))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = api_error_message(&error_text);
            warn!(status = status.as_u16(), %message, "chat completion request rejected");
            return Err(TranslationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let events = response
            .bytes_stream()
            .eventsource()
            .filter_map(|event| {
                future::ready(match event {
                    // Events with no data are not dispatched.
                    Ok(event) if event.data.is_empty() => None,
                    Ok(event) => Some(Ok(event.data)),
                    Err(EventStreamError::Transport(e)) => Some(Err(TranslationError::Network(e))),
                    Err(e) => Some(Err(TranslationError::Stream(e.to_string()))),
                })
            })
            .boxed();
        Ok(events)
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// `error.message` from an OpenAI-style error body, else the body itself.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}
