use super::*;
use serde_json::json;

#[test]
fn roles_serialize_lowercase() {
    let msg = ChatMessage { role: Role::Assistant, content: "hi".to_owned() };
    assert_eq!(serde_json::to_value(&msg).unwrap(), json!({ "role": "assistant", "content": "hi" }));
}

#[test]
fn request_wraps_messages() {
    let body = ChatRequest {
        messages: vec![
            ChatMessage { role: Role::System, content: "s".to_owned() },
            ChatMessage { role: Role::User, content: "u".to_owned() },
        ],
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][1]["content"], "u");
}

#[test]
fn unknown_role_is_rejected() {
    let parsed = serde_json::from_value::<ChatMessage>(json!({ "role": "tool", "content": "x" }));
    assert!(parsed.is_err());
}

#[test]
fn error_body_parses_with_and_without_stack() {
    let full: ChatErrorBody = serde_json::from_value(json!({
        "error": { "message": "boom", "name": "ApiResponse", "stack": "boom\ncaused by: x" }
    }))
    .unwrap();
    assert_eq!(full.error.name, "ApiResponse");
    assert!(full.error.stack.is_some());

    let bare: ChatErrorBody = serde_json::from_value(json!({
        "error": { "message": "boom", "name": "BadRequest" }
    }))
    .unwrap();
    assert!(bare.error.stack.is_none());
}
