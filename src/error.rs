//! HTTP-facing error type.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use leptos::prelude::*;

use crate::ui::{
    self,
    app::{ErrorPage, NotFoundPage},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Route segment is not a usable chat id.
    #[error("Invalid chat id: {0:?}")]
    InvalidChatId(String),

    /// No route matched.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidChatId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Io(e) => tracing::error!(name: "http.error", error = %e, "Internal error"),
            _ => tracing::debug!(name: "http.error", status = status.as_u16(), error = %self, "Request rejected"),
        }

        let body = match self {
            Self::NotFound(_) => ui::render_document("Not Found", || view! { <NotFoundPage/> }),
            Self::InvalidChatId(_) => ui::render_document("Bad Request", || {
                view! { <ErrorPage code="400" message="That chat link is not valid."/> }
            }),
            Self::Io(_) => ui::render_document("Error", || {
                view! { <ErrorPage code="500" message="Something went wrong on our side."/> }
            }),
        };

        (status, Html(body)).into_response()
    }
}
