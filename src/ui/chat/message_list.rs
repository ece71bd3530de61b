//! Chat message list region.

use leptos::prelude::*;

use super::provider::ChatContext;
use crate::ui::components::ScrollArea;

/// Scrollable region hosting the `<chat-stream>` element.
///
/// Message loading and rendering belong to the client bundle that defines
/// `<chat-stream>`; this only places it and tags it with the selected chat.
#[component]
pub fn ChatMessages() -> impl IntoView {
    let ctx = ChatContext::current();

    view! {
        <ScrollArea class="pr-1">
            <div data-role="chat-messages" data-chat-id=ctx.chat_id_str() class="h-full">
                <chat-stream
                    class="block h-full"
                    session-id=ctx.chat_id_str()
                    aria-live="polite"
                    aria-label="Chat messages"
                />
            </div>
        </ScrollArea>
    }
}
