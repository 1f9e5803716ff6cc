//! Streaming LLM translation client.
//!
//! This crate provides:
//! - `PromptPair` - Prompt selection for each `TranslateMode`
//! - `ChatCompletionRequest` - OpenAI-style streaming request body
//! - `Translator` - Sends the request and relays streamed deltas into a
//!   `TranslateHandler`
//! - `TranslatorConfig` - On-disk settings resolved into `TranslatorSettings`

mod config;
mod error;
mod handler;
pub mod lang;
mod mode;
mod prompt;
mod provider;
mod relay;
mod request;
mod transport;
mod translator;

pub use config::API_KEY_ENV;
pub use config::TranslatorConfig;
pub use config::TranslatorSettings;
pub use error::ABORTED_MESSAGE;
pub use error::TranslationError;
pub use handler::TranslateCallbacks;
pub use handler::TranslateEvent;
pub use handler::TranslateHandler;
pub use handler::TranslateResult;
pub use mode::TranslateMode;
pub use prompt::PromptPair;
pub use provider::ProviderDef;
pub use provider::ProviderId;
pub use relay::RelayAction;
pub use relay::RelayState;
pub use relay::StreamChunk;
pub use relay::TranslateMessage;
pub use request::CHAT_COMPLETIONS_PATH;
pub use request::ChatCompletionRequest;
pub use request::ChatMessage;
pub use request::endpoint_url;
pub use request::request_headers;
pub use transport::ChatTransport;
pub use transport::EventStream;
pub use transport::SseTransport;
pub use transport::StreamRequest;
pub use translator::TranslateQuery;
pub use translator::Translator;
pub use translator::relay_stream;

pub use tokio_util::sync::CancellationToken;
