use super::*;
use serde_json::json;

#[test]
fn gateway_user_deserializes_from_admin_payload() {
    let user: GatewayUser = serde_json::from_value(json!({
        "id": "u-1",
        "username": "root",
        "api_key": "key-123",
        "status": "active",
        "rpm_limit": 60,
        "token_quota": 100_000,
        "token_used": 1_234,
        "is_admin": true,
        "created_at": "2025-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.username, "root");
    assert!(user.is_admin);
}

#[test]
fn model_config_round_trips() {
    let config = ModelConfig {
        id: "m-1".to_owned(),
        title: "Claude".to_owned(),
        model_id: "claude-sonnet".to_owned(),
        api_key: "vendor-key".to_owned(),
        base_url: "https://api.example.com".to_owned(),
        vendor_type: "anthropic".to_owned(),
        cost_per_1k_tokens: 0.003,
        is_active: true,
    };
    let raw = serde_json::to_string(&config).unwrap();
    let back: ModelConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, config);
}

#[test]
fn usage_stat_deserializes_from_stats_payload() {
    let stat: UsageStat = serde_json::from_value(json!({
        "id": 7,
        "user_id": "u-1",
        "model_id": "m-1",
        "request_tokens": 10,
        "response_tokens": 20,
        "request_count": 1,
        "response_count": 1,
        "duration_ms": 450,
        "stat_type": "chat",
        "timestamp": "2025-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(stat.request_tokens + stat.response_tokens, 30);
}

#[test]
fn chat_message_serializes_in_proxy_shape() {
    let message = ChatMessage {
        role: "user".to_owned(),
        content: "hi".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({ "role": "user", "content": "hi" })
    );
}
