//! Caller-side sinks for a translation call.

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::relay::TranslateMessage;

/// Receives the output of one translation call.
///
/// `on_message` may fire any number of times, then exactly one of
/// `on_finish` or `on_error` fires and nothing follows it.
pub trait TranslateHandler {
    fn on_message(&mut self, message: TranslateMessage);
    fn on_error(&mut self, error: String);
    fn on_finish(&mut self, reason: String);
}

/// Handler built from three closures.
pub struct TranslateCallbacks<M, E, F> {
    on_message: M,
    on_error: E,
    on_finish: F,
}

impl<M, E, F> TranslateCallbacks<M, E, F>
where
    M: FnMut(TranslateMessage),
    E: FnMut(String),
    F: FnMut(String),
{
    pub fn new(on_message: M, on_error: E, on_finish: F) -> Self {
        Self {
            on_message,
            on_error,
            on_finish,
        }
    }
}

impl<M, E, F> TranslateHandler for TranslateCallbacks<M, E, F>
where
    M: FnMut(TranslateMessage),
    E: FnMut(String),
    F: FnMut(String),
{
    fn on_message(&mut self, message: TranslateMessage) {
        (self.on_message)(message);
    }

    fn on_error(&mut self, error: String) {
        (self.on_error)(error);
    }

    fn on_finish(&mut self, reason: String) {
        (self.on_finish)(reason);
    }
}

/// Callback as a value, for channel-based consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateEvent {
    Message(TranslateMessage),
    Error(String),
    Finish(String),
}

impl TranslateHandler for UnboundedSender<TranslateEvent> {
    fn on_message(&mut self, message: TranslateMessage) {
        let _ = self.send(TranslateEvent::Message(message));
    }

    fn on_error(&mut self, error: String) {
        let _ = self.send(TranslateEvent::Error(error));
    }

    fn on_finish(&mut self, reason: String) {
        let _ = self.send(TranslateEvent::Finish(reason));
    }
}

/// Collected outcome of one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslateHandler for TranslateResult {
    fn on_message(&mut self, message: TranslateMessage) {
        self.text
            .get_or_insert_with(String::new)
            .push_str(&message.content);
    }

    fn on_error(&mut self, error: String) {
        self.error = Some(error);
    }

    fn on_finish(&mut self, _reason: String) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn msg(content: &str) -> TranslateMessage {
        TranslateMessage {
            content: content.to_string(),
            role: None,
        }
    }

    #[test]
    fn result_concatenates_deltas() {
        let mut result = TranslateResult::default();
        result.on_message(msg("Bon"));
        result.on_message(msg("jour"));
        result.on_finish("stop".to_string());

        assert_eq!(result.text.as_deref(), Some("Bonjour"));
        assert_eq!(result.error, None);
    }

    #[test]
    fn result_records_error() {
        let mut result = TranslateResult::default();
        result.on_error("Network error: reset".to_string());
        assert_eq!(result.text, None);
        assert_eq!(result.error.as_deref(), Some("Network error: reset"));
    }

    #[test]
    fn callbacks_forward_to_closures() {
        let mut messages = Vec::new();
        let mut finished = None;
        {
            let mut handler = TranslateCallbacks::new(
                |m: TranslateMessage| messages.push(m.content),
                |_e: String| {},
                |r: String| finished = Some(r),
            );
            handler.on_message(msg("a"));
            handler.on_finish("length".to_string());
        }
        assert_eq!(messages, vec!["a".to_string()]);
        assert_eq!(finished.as_deref(), Some("length"));
    }

    #[tokio::test]
    async fn channel_sender_emits_events() {
        let (mut tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        tx.on_message(msg("x"));
        tx.on_error("boom".to_string());
        drop(tx);

        assert_eq!(rx.recv().await, Some(TranslateEvent::Message(msg("x"))));
        assert_eq!(rx.recv().await, Some(TranslateEvent::Error("boom".to_string())));
        assert_eq!(rx.recv().await, None);
    }
}
