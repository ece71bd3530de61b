//! Small reusable UI pieces shared by the pages.

mod button;
mod icons;
mod scroll_area;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::SendIcon;
pub use scroll_area::ScrollArea;
