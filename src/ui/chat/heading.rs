//! Page heading.

use leptos::prelude::*;

/// Title and subtitle block at the top of a page.
#[component]
pub fn PageHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div data-role="page-heading" class="pb-4 mb-4 border-b border-panelBorder">
            <h1 class="text-2xl font-semibold">{title}</h1>
            <p class="text-sm text-textMuted">{subtitle}</p>
        </div>
    }
}
