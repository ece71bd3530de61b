//! Selected chat page.

use leptos::prelude::*;

use super::{ChatInput, ChatMessages, ChatProvider, PageHeading};
use crate::chat_id::ChatId;

pub const CHAT_TITLE: &str = "Chat with Max Smart";
pub const CHAT_SUBTITLE: &str = "Talk to your AI about your data";

/// Heading, then a provider scope with the message list above the input.
#[component]
pub fn SelectedChatPage(
    /// Chat named by the route; forwarded into the provider scope.
    #[prop(default = None)]
    chat_id: Option<ChatId>,
) -> impl IntoView {
    view! {
        <PageHeading title=CHAT_TITLE subtitle=CHAT_SUBTITLE/>
        <ChatProvider chat_id=chat_id>
            <ChatMessages/>
            <ChatInput/>
        </ChatProvider>
    }
}
