//! Button component.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled call to action.
    #[default]
    Primary,
    /// Borderless, used for secondary navigation.
    Ghost,
}

impl ButtonVariant {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primaryMuted",
            Self::Ghost => "bg-transparent text-textPrimary hover:bg-panel",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Icon => "h-11 w-11",
        }
    }
}

#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    /// `type` attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Accessible label for icon-only buttons.
    #[prop(optional)]
    label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center rounded-xl font-medium transition-colors \
         focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary {} {}",
        variant.classes(),
        size.classes(),
    );

    view! {
        <button type=button_type class=classes aria-label=label>
            {children()}
        </button>
    }
}
