//! Networking modules for the gateway HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the gateway's admin endpoints and `types` defines the wire
//! schema. The session layer never issues network calls itself.

pub mod api;
pub mod types;
