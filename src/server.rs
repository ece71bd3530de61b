use axum::{
    Json, Router,
    extract::{OriginalUri, Path},
    response::Html,
    routing::get,
};
use leptos::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::chat_id::ChatId;
use crate::error::AppError;
use crate::ui::{
    self,
    app::HomePage,
    chat::{CHAT_PATH_PREFIX, NEW_CHAT_PATH, SelectedChatPage},
};

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(home_handler))
        .route(NEW_CHAT_PATH, get(new_chat_handler))
        .route(&format!("{CHAT_PATH_PREFIX}/{{chat_id}}"), get(chat_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", static_dir)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the process is stopped.
pub async fn start_server(state: Arc<AppState>) -> Result<(), AppError> {
    let addr = state.config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        static_dir = %state.config.server.static_dir,
        "Server started"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn home_handler() -> Html<String> {
    Html(ui::render_document("Home", || view! { <HomePage/> }))
}

/// Chat page with no chat selected yet.
async fn new_chat_handler() -> Html<String> {
    Html(ui::render_document("New Chat", || view! { <SelectedChatPage/> }))
}

async fn chat_handler(Path(raw): Path<String>) -> Result<Html<String>, AppError> {
    let chat_id = ChatId::parse(&raw)?;
    info!(name: "chat.page.rendered", chat_id = %chat_id, "Rendering chat page");

    Ok(Html(ui::render_document("Chat", move || {
        view! { <SelectedChatPage chat_id=Some(chat_id)/> }
    })))
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    name: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn not_found_handler(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}
