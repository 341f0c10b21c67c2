use super::*;

// =============================================================
// Response parsing
// =============================================================

#[test]
fn parses_first_choice_content() {
    let json = serde_json::json!({
        "model": "gpt-3.5-turbo",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": "Hello!" }, "finish_reason": "stop" },
            { "index": 1, "message": { "role": "assistant", "content": "ignored" }, "finish_reason": "stop" }
        ]
    })
    .to_string();
    assert_eq!(parse_chat_completions_response(&json).unwrap(), "Hello!");
}

#[test]
fn empty_choices_is_a_parse_error() {
    let json = serde_json::json!({ "choices": [] }).to_string();
    let err = parse_chat_completions_response(&json).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(ref msg) if msg.contains("choices[0]")));
}

#[test]
fn null_content_is_a_parse_error() {
    let json = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn invalid_json_is_a_parse_error() {
    assert!(matches!(parse_chat_completions_response("<html>"), Err(LlmError::ApiParse(_))));
}

// =============================================================
// Request body
// =============================================================

#[test]
fn request_body_carries_fixed_sampling_settings() {
    let messages = vec![
        Message { role: "system".into(), content: "be brief".into() },
        Message { role: "user".into(), content: "hi".into() },
    ];
    let body = CcRequest { model: "gpt-3.5-turbo", messages: &messages, temperature: TEMPERATURE, max_tokens: MAX_TOKENS };
    let value = serde_json::to_value(&body).unwrap();

    assert_eq!(value["model"], "gpt-3.5-turbo");
    assert_eq!(value["max_tokens"], 500);
    assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][1]["content"], "hi");
}

#[test]
fn client_builds_from_config() {
    let config = LlmConfig {
        api_key: "sk-test".into(),
        model: "gpt-3.5-turbo".into(),
        base_url: "https://example.test/v1".into(),
        timeouts: crate::llm::config::LlmTimeouts { request_secs: 5, connect_secs: 1 },
    };
    let client = OpenAiClient::new(config).unwrap();
    assert_eq!(client.model(), "gpt-3.5-turbo");
}
