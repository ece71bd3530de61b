//! Scrollable container.

use leptos::prelude::*;

/// Vertically scrolling region that fills the remaining flex space.
#[component]
pub fn ScrollArea(
    /// Extra classes appended to the base set.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("relative flex-1 min-h-0 overflow-y-auto scrollbar-thin {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
