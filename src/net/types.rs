//! Wire DTOs for the Conduit gateway admin API.
//!
//! DESIGN
//! ======
//! These types mirror the gateway's admin records so serde round-trips stay
//! lossless. Timestamps cross the wire as ISO 8601 strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A gateway account as returned by `/admin/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GatewayUser {
    /// Unique user identifier.
    pub id: String,
    /// Display/login name.
    pub username: String,
    /// The account's gateway API key.
    pub api_key: String,
    /// Account status (`"active"` or `"disabled"`).
    pub status: String,
    /// Requests-per-minute limit.
    pub rpm_limit: i64,
    /// Total token allowance.
    pub token_quota: i64,
    /// Tokens consumed so far.
    pub token_used: i64,
    /// Whether the account may use the admin surface.
    pub is_admin: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// An upstream model configuration as returned by `/admin/models`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Unique configuration identifier.
    pub id: String,
    /// Human-readable title shown in the dashboard.
    pub title: String,
    /// Upstream model identifier (e.g. `"gpt-4o"`).
    pub model_id: String,
    /// Vendor API key used by the gateway for this model.
    pub api_key: String,
    /// Vendor endpoint base URL.
    pub base_url: String,
    /// Vendor adapter name (e.g. `"openai"`, `"anthropic"`).
    pub vendor_type: String,
    /// Billing rate used for usage accounting.
    pub cost_per_1k_tokens: f64,
    /// Whether the gateway routes requests to this model.
    pub is_active: bool,
}

/// Fields for registering a new model configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewModel {
    pub title: String,
    pub model_id: String,
    pub api_key: String,
    pub base_url: String,
    pub vendor_type: String,
    pub cost_per_1k_tokens: f64,
    pub is_active: bool,
}

/// One usage record as returned by `/admin/stats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageStat {
    /// Record identifier.
    pub id: i64,
    /// Account the call was billed to.
    pub user_id: String,
    /// Model configuration that served the call.
    pub model_id: String,
    /// Prompt tokens.
    pub request_tokens: i64,
    /// Completion tokens.
    pub response_tokens: i64,
    /// Requests aggregated into this record.
    pub request_count: i64,
    /// Responses aggregated into this record.
    pub response_count: i64,
    /// Wall-clock duration of the call(s).
    pub duration_ms: i64,
    /// Record kind (e.g. `"chat"`).
    pub stat_type: String,
    /// ISO 8601 timestamp of the record.
    pub timestamp: String,
}

/// One turn of a playground conversation, in the completion-proxy shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"user"` or `"assistant"`.
    pub role: String,
    /// Message text (markdown for assistant turns).
    pub content: String,
}
