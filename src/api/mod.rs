//! HTTP API wiring (Axum router + shared request state).
//!
//! - `items.rs`: the `/items` routes and their handlers
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde_json::json;

use crate::config::Messages;
use crate::core::ItemService;

pub mod errors;
pub mod items;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Item operations
    pub items: ItemService,
    /// Localized user-facing messages
    pub messages: Arc<Messages>,
}

impl AppState {
    /// Bundles the service and message table for the router.
    #[must_use]
    pub fn new(items: ItemService, messages: Messages) -> Self {
        Self {
            items,
            messages: Arc::new(messages),
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(items::router())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
