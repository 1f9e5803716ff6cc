use glossa_translator::TranslateEvent;
use glossa_translator::TranslateMode;
use glossa_translator::TranslateQuery;
use glossa_translator::TranslationError;
use glossa_translator::Translator;
use glossa_translator::TranslatorSettings;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

fn sse_body(payloads: &[serde_json::Value]) -> String {
    let mut body = String::new();
    for payload in payloads {
        body.push_str(&format!("data: {payload}\n\n"));
    }
    body.push_str("data: [DONE]\n\n");
    body
}

async fn collect(translator: &Translator, query: TranslateQuery) -> Vec<TranslateEvent> {
    let (mut tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    translator.translate(query, &mut tx).await.unwrap();
    drop(tx);
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn streams_translation_from_openai_compatible_endpoint() {
    let server = MockServer::start().await;
    let expected_body = json!({
        "model": "gpt-3.5-turbo",
        "temperature": 0,
        "max_tokens": 2000,
        "top_p": 1,
        "frequency_penalty": 1,
        "presence_penalty": 1,
        "messages": [
            {
                "role": "system",
                "content": "You are a text summarizer, you can only summarize the text, don't interpret it.",
            },
            {
                "role": "user",
                "content": "summarize this text in the most concise language and must use French language!",
            },
            { "role": "user", "content": "\"A long story.\"" },
        ],
        "stream": true,
    });
    let body = sse_body(&[
        json!({"choices":[{"index":0,"delta":{"role":"assistant","content":"“Une"},"finish_reason":null}]}),
        json!({"choices":[{"index":0,"delta":{"content":" histoire."},"finish_reason":null}]}),
        json!({"choices":[{"index":0,"delta":{},"finish_reason":"stop"}]}),
    ]);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-live"))
        .and(header("content-type", "application/json"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let translator = Translator::new(TranslatorSettings::new(server.uri(), "sk-live", "gpt-3.5-turbo"));
    let events = collect(
        &translator,
        TranslateQuery::new("A long story.", "en", "fr", TranslateMode::Summarize),
    )
    .await;

    let text: String = events
        .iter()
        .filter_map(|event| match event {
            TranslateEvent::Message(message) => Some(message.content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "Une histoire.");
    assert_eq!(events.last(), Some(&TranslateEvent::Finish("stop".to_string())));
}

#[tokio::test]
async fn http_error_is_reported_through_on_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429).set_body_raw(
                r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#,
                "application/json",
            ),
        )
        .mount(&server)
        .await;

    let translator = Translator::new(TranslatorSettings::new(server.uri(), "sk-live", "gpt-3.5-turbo"));
    let events = collect(
        &translator,
        TranslateQuery::new("hi", "en", "ja", TranslateMode::Translate),
    )
    .await;

    assert_eq!(
        events,
        vec![TranslateEvent::Error("API error (429): Rate limit reached".to_string())]
    );
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let translator = Translator::new(TranslatorSettings::new("http://127.0.0.1:9", "sk", "m"));
    let events = collect(
        &translator,
        TranslateQuery::new("hi", "en", "ja", TranslateMode::Translate),
    )
    .await;

    assert_eq!(events.len(), 1);
    let TranslateEvent::Error(message) = &events[0] else {
        panic!("expected error, got {events:?}");
    };
    assert!(message.starts_with("Network error"), "{message}");
    assert!(!TranslationError::is_aborted_message(message));
}

#[tokio::test]
async fn translate_to_result_over_http() {
    let server = MockServer::start().await;
    let body = sse_body(&[
        json!({"choices":[{"delta":{"role":"assistant","content":"「你好"}}]}),
        json!({"choices":[{"delta":{"content":"」"}}]}),
        json!({"choices":[{"delta":{},"finish_reason":"stop"}]}),
    ]);
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let translator = Translator::new(TranslatorSettings::new(server.uri(), "sk", "m"));
    let result = translator
        .translate_to_result(TranslateQuery::new("hello", "en", "zh-Hans", TranslateMode::Translate))
        .await
        .unwrap();

    assert_eq!(result.text.as_deref(), Some("你好」"));
    assert_eq!(result.error, None);
}
