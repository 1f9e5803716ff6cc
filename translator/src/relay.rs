//! Per-event relay step for chat-completion streams.
//!
//! Each `data:` payload is turned into a [`RelayAction`]. The step is
//! synchronous and owns no I/O, so replaying the same lines through a fresh
//! [`RelayState`] always yields the same actions.

use serde::Deserialize;
use tracing::debug;
use tracing::trace;

/// Characters a model may open its answer with, mirroring the quotes the
/// input text is wrapped in.
const LEADING_QUOTES: &[char] = &['“', '"', '「'];

/// Finish reason reported when an event cannot be parsed.
pub const FALLBACK_FINISH_REASON: &str = "stop";

/// One streamed chat-completion event.
#[derive(Debug, Default, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Option<Vec<StreamChoice>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub delta: Option<StreamDelta>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StreamDelta {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Incremental output delivered to `on_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateMessage {
    pub content: String,
    pub role: Option<String>,
}

/// What the driver should do with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayAction {
    /// Deliver to `on_message` and keep reading.
    Message(TranslateMessage),
    /// Terminal. Deliver the reason to `on_finish`; no further lines should
    /// be relayed.
    Finish(String),
    /// No callback for this event.
    Ignore,
}

/// Call-scoped relay state.
#[derive(Debug)]
pub struct RelayState {
    is_first: bool,
}

impl Default for RelayState {
    fn default() -> Self {
        Self { is_first: true }
    }
}

impl RelayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn one `data:` payload into the action the driver should take.
    ///
    /// Unparseable payloads finish with [`FALLBACK_FINISH_REASON`], events
    /// without choices are ignored, and a non-empty `finish_reason` is
    /// terminal. A leading quote is stripped until the first event that
    /// carries no role.
    pub fn relay_line(&mut self, raw: &str) -> RelayAction {
        let chunk: StreamChunk = match serde_json::from_str(raw) {
            Ok(chunk) => chunk,
            Err(e) => {
                // `[DONE]` lands here too.
                debug!(error = %e, data = raw, "unparseable stream event, finishing");
                return RelayAction::Finish(FALLBACK_FINISH_REASON.to_string());
            }
        };

        let Some(choice) = chunk.choices.and_then(|choices| choices.into_iter().next()) else {
            debug!(data = raw, "stream event without choices, ignoring");
            return RelayAction::Ignore;
        };

        // Some proxies send `""` on every non-final chunk.
        if let Some(reason) = choice.finish_reason.filter(|r| !r.is_empty()) {
            trace!(finish_reason = %reason, "stream finished");
            return RelayAction::Finish(reason);
        }

        let StreamDelta { content, role } = choice.delta.unwrap_or_default();
        let mut content = content.unwrap_or_default();

        if self.is_first
            && let Some(first) = content.chars().next()
            && LEADING_QUOTES.contains(&first)
        {
            content.remove(0);
        }

        if role.as_deref().is_none_or(str::is_empty) {
            self.is_first = false;
        }

        RelayAction::Message(TranslateMessage { content, role })
    }
}
