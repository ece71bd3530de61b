//! Home-navigation logo.

use leptos::prelude::*;

use super::{BRAND_NAME, HOME_PATH};

/// Static image reference used by the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoImage {
    pub src: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

pub const LOGO_IMAGE: LogoImage = LogoImage {
    src: "/static/logo.svg",
    width: 48,
    height: 48,
    alt: "Max Smart logo",
};

/// Link to the root path with the square logo image and a bold label.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <a href=HOME_PATH class="flex items-center gap-3 hover:opacity-80 transition-opacity">
            <img
                src=LOGO_IMAGE.src
                width=LOGO_IMAGE.width.to_string()
                height=LOGO_IMAGE.height.to_string()
                alt=LOGO_IMAGE.alt
                class="rounded-full"
            />
            <span class="font-bold text-lg">{BRAND_NAME}</span>
        </a>
    }
}
