//! Document shell and top-level pages.

use leptos::prelude::*;

use super::BRAND_NAME;
use super::chat::NEW_CHAT_PATH;
use super::components::{Button, ButtonVariant};
use super::logo::Logo;

/// HTML document wrapper.
///
/// Renders `<html>` with head metadata, the header bar carrying the
/// [`Logo`], and `children` in the `<main>` slot. The doctype is prepended
/// by [`render_document`](super::render_document).
#[component]
pub fn Document(
    /// Page title, suffixed with the brand name.
    title: String,
    /// Main content.
    children: Children,
) -> impl IntoView {
    let full_title = format!("{title} - {BRAND_NAME}");

    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Talk to your AI about your data"/>
                <title>{full_title}</title>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <div id="app-shell" class="flex flex-col h-screen overflow-hidden">
                    <header class="sticky top-0 z-50 w-full bg-surfaceContainer shadow-sm shrink-0">
                        <nav class="container mx-auto flex h-16 items-center px-4 md:px-6 max-w-5xl">
                            <Logo/>
                        </nav>
                    </header>
                    <main id="app" class="flex-1 flex flex-col overflow-hidden container mx-auto px-4 md:px-6 py-4 max-w-5xl">
                        {children()}
                    </main>
                </div>
            </body>
        </html>
    }
}

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="flex flex-col items-center justify-center py-20 gap-6 text-center">
            <h1 class="text-3xl font-bold">"Welcome to Max Smart"</h1>
            <p class="text-textMuted max-w-md">
                "Ask questions about your data in plain language."
            </p>
            <a href=NEW_CHAT_PATH>
                <Button variant=ButtonVariant::Primary>"Start a new chat"</Button>
            </a>
        </section>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <ErrorPage code="404" message="Page not found"/> }
}

/// Generic status page with a way back home.
#[component]
pub fn ErrorPage(code: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <section class="flex flex-col items-center justify-center py-20">
            <h1 class="text-4xl font-bold mb-4">{code}</h1>
            <p class="text-textMuted mb-6">{message}</p>
            <a href="/">
                <Button variant=ButtonVariant::Ghost>"Go Home"</Button>
            </a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_document;

    #[test]
    fn document_wraps_page_with_logo_header() {
        let html = render_document("Home", || view! { <HomePage/> });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home - Max Smart</title>"));
        let header = html.find("<header").unwrap();
        let main = html.find("<main").unwrap();
        let logo = html.find("/static/logo.svg").unwrap();
        assert!(header < logo && logo < main);
        assert!(html.contains("Welcome to Max Smart"));
    }

    #[test]
    fn home_links_to_new_chat() {
        let html = render_document("Home", || view! { <HomePage/> });
        assert!(html.contains(r#"href="/chat/new""#));
    }

    #[test]
    fn not_found_page_shows_code() {
        let html = render_document("Not Found", || view! { <NotFoundPage/> });
        assert!(html.contains("404"));
        assert!(html.contains("Page not found"));
    }
}
