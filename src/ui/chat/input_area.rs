//! Chat input control.

use leptos::prelude::*;

use super::provider::ChatContext;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, SendIcon};

/// Message form pinned below the message list.
#[component]
pub fn ChatInput() -> impl IntoView {
    let ctx = ChatContext::current();
    let chat_id = ctx.chat_id_str().unwrap_or_default();

    view! {
        <div data-role="chat-input" class="shrink-0 pt-4">
            <form method="post" action=ctx.endpoint class="flex gap-2">
                <input type="hidden" name="chat_id" value=chat_id />
                <textarea
                    name="message"
                    placeholder="Ask about your data..."
                    rows="1"
                    class="flex-1 min-h-[44px] max-h-[200px] px-4 py-3 rounded-xl border \
                           border-panelBorder bg-background resize-none \
                           focus:outline-none focus:ring-2 focus:ring-primary"
                    required
                />
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Icon
                    button_type="submit"
                    label="Send message"
                >
                    <SendIcon/>
                </Button>
            </form>
        </div>
    }
}
