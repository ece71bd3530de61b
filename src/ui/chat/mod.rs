//! Selected chat page and its collaborators.
//!
//! [`SelectedChatPage`] composes a [`PageHeading`] and a [`ChatProvider`]
//! scope holding [`ChatMessages`] above [`ChatInput`]. The provider hands a
//! [`ChatContext`] down the render tree; the children read it instead of
//! taking props from the page.

mod heading;
mod input_area;
mod message_list;
mod page;
mod provider;

pub use heading::PageHeading;
pub use input_area::ChatInput;
pub use message_list::ChatMessages;
pub use page::{CHAT_SUBTITLE, CHAT_TITLE, SelectedChatPage};
pub use provider::{CHAT_ENDPOINT, ChatContext, ChatProvider};

/// Route prefix for chat pages.
pub const CHAT_PATH_PREFIX: &str = "/chat";

/// Target of the "start a new chat" link.
pub const NEW_CHAT_PATH: &str = "/chat/new";
