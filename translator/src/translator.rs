//! Streaming translation driver.

use std::sync::Arc;

use futures::Stream;
use futures::StreamExt;
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::warn;

use crate::config::TranslatorSettings;
use crate::error::TranslationError;
use crate::handler::TranslateHandler;
use crate::handler::TranslateResult;
use crate::mode::TranslateMode;
use crate::prompt::PromptPair;
use crate::relay::FALLBACK_FINISH_REASON;
use crate::relay::RelayAction;
use crate::relay::RelayState;
use crate::request::ChatCompletionRequest;
use crate::request::endpoint_url;
use crate::request::request_headers;
use crate::transport::ChatTransport;
use crate::transport::SseTransport;
use crate::transport::StreamRequest;

/// Input for one translation call.
#[derive(Debug, Clone)]
pub struct TranslateQuery {
    pub text: String,
    pub detect_from: String,
    pub detect_to: String,
    pub mode: TranslateMode,
    /// Cancelling aborts the in-flight request.
    pub cancel: CancellationToken,
}

impl TranslateQuery {
    pub fn new(
        text: impl Into<String>,
        detect_from: impl Into<String>,
        detect_to: impl Into<String>,
        mode: TranslateMode,
    ) -> Self {
        Self {
            text: text.into(),
            detect_from: detect_from.into(),
            detect_to: detect_to.into(),
            mode,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Chat-completion translator bound to one endpoint.
///
/// Holds no per-call state; clones share the transport.
pub struct Translator<T = SseTransport> {
    settings: TranslatorSettings,
    transport: Arc<T>,
}

impl<T> Clone for Translator<T> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl Translator<SseTransport> {
    pub fn new(settings: TranslatorSettings) -> Self {
        Self::with_transport(settings, SseTransport::new())
    }
}

impl<T: ChatTransport> Translator<T> {
    /// Build a translator over a caller-supplied transport.
    pub fn with_transport(settings: TranslatorSettings, transport: T) -> Self {
        Self {
            settings,
            transport: Arc::new(transport),
        }
    }

    /// Settings every request is built from.
    pub fn settings(&self) -> &TranslatorSettings {
        &self.settings
    }

    /// Build the streaming request for `query` without sending it.
    pub fn build_request(&self, query: &TranslateQuery) -> Result<StreamRequest, TranslationError> {
        let prompts = PromptPair::for_query(query.mode, &query.detect_from, &query.detect_to);
        let body = ChatCompletionRequest::new(&self.settings.model, &prompts, &query.text);
        let body = serde_json::to_string(&body)
            .map_err(|e| TranslationError::InvalidConfig(format!("unserializable request: {e}")))?;

        Ok(StreamRequest {
            url: endpoint_url(&self.settings.api_url),
            method: Method::POST,
            headers: request_headers(&self.settings.api_key)?,
            body,
        })
    }

    /// Stream the translation of `query` into `handler`.
    ///
    /// Transport failures and cancellation are reported through
    /// `handler.on_error`; the returned error is reserved for requests that
    /// could not be built at all.
    pub async fn translate<H>(
        &self,
        query: TranslateQuery,
        handler: &mut H,
    ) -> Result<(), TranslationError>
    where
        H: TranslateHandler + ?Sized,
    {
        let request = self.build_request(&query)?;
        debug!(
            mode = %query.mode,
            from = %query.detect_from,
            to = %query.detect_to,
            "starting translation"
        );

        let cancel = query.cancel;
        let opened = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TranslationError::Aborted),
            opened = self.transport.open(request) => opened,
        };

        match opened {
            Ok(events) => relay_stream(events, &cancel, handler).await,
            Err(e) => {
                warn!(error = %e, "failed to open translation stream");
                handler.on_error(e.to_string());
            }
        }
        Ok(())
    }

    /// Run `query` to completion and collect the output.
    pub async fn translate_to_result(
        &self,
        query: TranslateQuery,
    ) -> Result<TranslateResult, TranslationError> {
        let mut result = TranslateResult {
            from: Some(query.detect_from.clone()),
            to: Some(query.detect_to.clone()),
            ..Default::default()
        };
        self.translate(query, &mut result).await?;
        Ok(result)
    }
}

/// Relay raw event payloads into `handler` until a terminal event.
///
/// A stream that ends without a finish reason is reported as a `stop` finish,
/// so every call ends in exactly one of `on_finish` / `on_error`.
pub async fn relay_stream<S, H>(mut events: S, cancel: &CancellationToken, handler: &mut H)
where
    S: Stream<Item = Result<String, TranslationError>> + Unpin,
    H: TranslateHandler + ?Sized,
{
    let mut state = RelayState::new();
    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("translation cancelled");
                handler.on_error(TranslationError::Aborted.to_string());
                return;
            }
            next = events.next() => next,
        };

        match next {
            Some(Ok(line)) => match state.relay_line(&line) {
                RelayAction::Message(message) => handler.on_message(message),
                RelayAction::Finish(reason) => {
                    handler.on_finish(reason);
                    return;
                }
                RelayAction::Ignore => {}
            },
            Some(Err(e)) => {
                warn!(error = %e, "translation stream failed");
                handler.on_error(e.to_string());
                return;
            }
            None => {
                debug!("stream closed without a finish reason");
                handler.on_finish(FALLBACK_FINISH_REASON.to_string());
                return;
            }
        }
    }
}
