//! REST wrappers for the Conduit gateway admin API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authenticated with
//! the session's admin key as a bearer token. Server-side (SSR): stubs
//! returning errors since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so gateway failures degrade
//! UI behavior without crashing hydration. Nothing here touches session
//! state; the login page decides what to do with a successful response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

#[cfg(feature = "hydrate")]
use serde::Deserialize;

use super::types::{GatewayUser, ModelConfig, NewModel, UsageStat};

/// Gateway the dashboard proxies to.
#[cfg(any(test, feature = "hydrate"))]
const GATEWAY_BASE: &str = "http://localhost:8080";

#[cfg(any(test, feature = "hydrate"))]
fn gateway_url(path: &str) -> String {
    format!("{GATEWAY_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(key: &str) -> String {
    format!("Bearer {key}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Pull the first choice's message text out of a completion-proxy response.
#[cfg(any(test, feature = "hydrate"))]
fn extract_chat_reply(body: &Value) -> Option<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct LoginResponse {
    ok: bool,
    user: Value,
}

/// Authenticate an admin key via `POST /admin/login`.
///
/// Returns the authenticated user record; the caller stores it alongside the
/// key it supplied.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the gateway responds
/// with a non-OK status, or the key is rejected.
pub async fn login(api_key: &str) -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "api_key": api_key });
        let resp = gloo_net::http::Request::post(&gateway_url("/admin/login"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("login failed".to_owned());
        }
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_key;
        Err("not available on server".to_owned())
    }
}

/// Fetch all gateway accounts via `GET /admin/users`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn fetch_users(key: &str) -> Result<Vec<GatewayUser>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&gateway_url("/admin/users"))
            .header("Authorization", &bearer(key))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("user list", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /admin/users`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn create_user(
    key: &str,
    username: &str,
    api_key: &str,
    is_admin: bool,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "api_key": api_key,
            "is_admin": is_admin,
        });
        send_admin_json(key, Verb::Post, "/admin/users", &payload, "create user").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, username, api_key, is_admin);
        Err("not available on server".to_owned())
    }
}

/// Update an account via `PUT /admin/users`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn update_user(
    key: &str,
    user_id: &str,
    username: &str,
    api_key: &str,
    status: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "user_id": user_id,
            "username": username,
            "api_key": api_key,
            "status": status,
        });
        send_admin_json(key, Verb::Put, "/admin/users", &payload, "update user").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, user_id, username, api_key, status);
        Err("not available on server".to_owned())
    }
}

/// Delete an account via `DELETE /admin/users`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn delete_user(key: &str, user_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id });
        send_admin_json(key, Verb::Delete, "/admin/users", &payload, "delete user").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, user_id);
        Err("not available on server".to_owned())
    }
}

/// Update an account's limits via `POST /admin/users/quota`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn update_quota(
    key: &str,
    user_id: &str,
    rpm_limit: i64,
    token_quota: i64,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "user_id": user_id,
            "rpm_limit": rpm_limit,
            "token_quota": token_quota,
        });
        send_admin_json(key, Verb::Post, "/admin/users/quota", &payload, "update quota").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, user_id, rpm_limit, token_quota);
        Err("not available on server".to_owned())
    }
}

/// Fetch all model configurations via `GET /admin/models`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn fetch_models(key: &str) -> Result<Vec<ModelConfig>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&gateway_url("/admin/models"))
            .header("Authorization", &bearer(key))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("model list", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err("not available on server".to_owned())
    }
}

/// Register a model configuration via `POST /admin/models`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn create_model(key: &str, model: &NewModel) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(model).map_err(|e| e.to_string())?;
        send_admin_json(key, Verb::Post, "/admin/models", &payload, "create model").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, model);
        Err("not available on server".to_owned())
    }
}

/// Replace a model configuration via `PUT /admin/models`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn update_model(key: &str, model: &ModelConfig) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(model).map_err(|e| e.to_string())?;
        send_admin_json(key, Verb::Put, "/admin/models", &payload, "update model").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, model);
        Err("not available on server".to_owned())
    }
}

/// Delete a model configuration via `DELETE /admin/models`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn delete_model(key: &str, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "id": id });
        send_admin_json(key, Verb::Delete, "/admin/models", &payload, "delete model").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch recent usage records via `GET /admin/stats`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK status.
pub async fn fetch_stats(key: &str) -> Result<Vec<UsageStat>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&gateway_url("/admin/stats"))
            .header("Authorization", &bearer(key))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("stats", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err("not available on server".to_owned())
    }
}

/// Send a playground conversation through `POST /v1/chat/completions` and
/// return the assistant reply text.
///
/// # Errors
///
/// Returns an error string on HTTP failure, a non-OK status, or a response
/// with no assistant message.
pub async fn chat(key: &str, payload: &Value) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&gateway_url("/v1/chat/completions"))
            .header("Authorization", &bearer(key))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("chat", resp.status()));
        }
        let body: Value = resp.json().await.map_err(|e| e.to_string())?;
        extract_chat_reply(&body).ok_or_else(|| "empty chat response".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, payload);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
enum Verb {
    Post,
    Put,
    Delete,
}

/// Shared JSON-body admin call: bearer header, payload, status check.
#[cfg(feature = "hydrate")]
async fn send_admin_json(
    key: &str,
    verb: Verb,
    path: &str,
    payload: &Value,
    what: &str,
) -> Result<(), String> {
    let url = gateway_url(path);
    let builder = match verb {
        Verb::Post => gloo_net::http::Request::post(&url),
        Verb::Put => gloo_net::http::Request::put(&url),
        Verb::Delete => gloo_net::http::Request::delete(&url),
    };
    let resp = builder
        .header("Authorization", &bearer(key))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    Ok(())
}
