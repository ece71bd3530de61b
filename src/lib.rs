//! Max Smart web front-end.
//!
//! Server-rendered pages for chatting with an AI about your data.
//!
//! # Architecture
//!
//! - **Server**: Axum router rendering pages and serving static assets
//! - **UI**: Leptos SSR components, each request rendered in its own reactive owner
//!
//! # Modules
//!
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`ui`]: logo, chat page and document shell
//! - [`server`]: routes and startup
//! - [`error`]: HTTP error type

pub mod chat_id;
pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
