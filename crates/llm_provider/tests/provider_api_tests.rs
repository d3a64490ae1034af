use llm_provider::providers::{AnthropicProvider, CohereProvider, OpenAiProvider};
use llm_provider::{CompletionProvider, ProviderError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn openai_extracts_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "generated text"}}
            ]
        })))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("test-key", "gpt-4o-mini").with_base_url(server.uri());
    let output = provider.complete("hello").await.unwrap();
    assert_eq!(output, "generated text");
}

#[tokio::test]
async fn openai_maps_http_failure_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("test-key", "gpt-4o-mini").with_base_url(server.uri());
    let err = provider.complete("hello").await.unwrap_err();
    match err {
        ProviderError::Api(msg) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("upstream down"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn anthropic_sends_version_header_and_reads_text_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "text", "text": "claude says hi"}
            ]
        })))
        .mount(&server)
        .await;

    let provider =
        AnthropicProvider::new("test-key", "claude-3-5-haiku-latest").with_base_url(server.uri());
    let output = provider.complete("hello").await.unwrap();
    assert_eq!(output, "claude says hi");
}

#[tokio::test]
async fn cohere_reads_chat_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "co-response"})))
        .mount(&server)
        .await;

    let provider = CohereProvider::new("test-key", "command-r").with_base_url(server.uri());
    let output = provider.complete("hello").await.unwrap();
    assert_eq!(output, "co-response");
}
