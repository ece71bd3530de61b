//! Server-rendered UI.
//!
//! Leptos SSR components for the Max Smart front-end. Every render pass runs
//! inside a fresh reactive [`Owner`] so provided context stays scoped to one
//! request.
//!
//! # Structure
//!
//! - [`app`]: document shell and the home/404/error pages
//! - [`logo`]: home-navigation logo link
//! - [`chat`]: selected chat page and its collaborators
//! - [`components`]: small reusable pieces (button, icons, scroll area)

use leptos::prelude::*;
use leptos::reactive::owner::Owner;

pub mod app;
pub mod chat;
pub mod components;
pub mod logo;

use app::Document;

/// Product name shown in the logo and page titles.
pub const BRAND_NAME: &str = "Max Smart";

/// Root route, target of the logo link.
pub const HOME_PATH: &str = "/";

/// Render a view to an HTML fragment.
pub fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}

/// Render a full HTML document with `page` in the main slot.
pub fn render_document<F, V>(title: &str, page: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let title = title.to_owned();
    let body = render(move || {
        view! {
            <Document title=title>
                {page()}
            </Document>
        }
    });
    format!("<!DOCTYPE html>{body}")
}
