use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_key_is_set() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
    assert_eq!(cfg.api_key, "sk-test");
    assert_eq!(cfg.model, DEFAULT_OPENAI_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn overrides_are_parsed() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("OPENAI_MODEL", "gpt-4o-mini"),
        ("OPENAI_BASE_URL", "https://example.test/v1/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.model, "gpt-4o-mini");
    assert_eq!(cfg.base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn missing_key_is_an_error() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "OPENAI_API_KEY"));
}

#[test]
fn blank_key_is_treated_as_missing() {
    let err = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}

#[test]
fn bad_timeout_is_a_parse_error() {
    let err = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk"), ("LLM_REQUEST_TIMEOUT_SECS", "soon")]))
        .unwrap_err();
    assert!(err.to_string().contains("LLM_REQUEST_TIMEOUT_SECS"));
}

#[test]
fn debug_output_redacts_key() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-very-secret")])).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-very-secret"));
    assert!(rendered.contains("redacted"));
}
