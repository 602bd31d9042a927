use super::*;
use serde_json::json;

#[test]
fn build_chat_payload_wraps_model_and_messages() {
    let messages = vec![
        ChatMessage {
            role: "user".to_owned(),
            content: "hi".to_owned(),
        },
        ChatMessage {
            role: "assistant".to_owned(),
            content: "hello".to_owned(),
        },
    ];
    assert_eq!(
        build_chat_payload("claude-sonnet", &messages),
        json!({
            "model": "claude-sonnet",
            "messages": [
                { "role": "user", "content": "hi" },
                { "role": "assistant", "content": "hello" },
            ],
        })
    );
}

#[test]
fn build_chat_payload_with_no_history_sends_an_empty_list() {
    assert_eq!(
        build_chat_payload("claude-sonnet", &[]),
        json!({ "model": "claude-sonnet", "messages": [] })
    );
}
