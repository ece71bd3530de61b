//! Chat context scope.

use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use crate::chat_id::ChatId;

/// Endpoint chat input forms post to. Served by the chat backend.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Values shared with everything rendered inside a [`ChatProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatContext {
    /// Chat selected by the route, if any.
    pub chat_id: Option<ChatId>,
    /// Where new messages are submitted.
    pub endpoint: &'static str,
}

impl Default for ChatContext {
    fn default() -> Self {
        Self {
            chat_id: None,
            endpoint: CHAT_ENDPOINT,
        }
    }
}

impl ChatContext {
    pub fn new(chat_id: Option<ChatId>) -> Self {
        Self {
            chat_id,
            ..Self::default()
        }
    }

    /// Context provided by the nearest enclosing [`ChatProvider`], or the default.
    pub fn current() -> Self {
        use_context::<Self>().unwrap_or_default()
    }

    pub fn chat_id_str(&self) -> Option<String> {
        self.chat_id.as_ref().map(ToString::to_string)
    }
}

/// Establishes a [`ChatContext`] for `children`.
///
/// Children run under a child owner, so the context is invisible to
/// siblings rendered after the provider.
#[component]
pub fn ChatProvider(
    /// Chat selected by the route.
    #[prop(default = None)]
    chat_id: Option<ChatId>,
    children: Children,
) -> impl IntoView {
    let owner = Owner::current().map_or_else(Owner::new, |parent| parent.child());
    let scoped = owner.with(|| {
        provide_context(ChatContext::new(chat_id));
        children()
    });

    view! {
        <div data-role="chat-provider" class="flex flex-1 flex-col min-h-0">
            {scoped}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render;

    #[component]
    fn ContextReader() -> impl IntoView {
        let ctx = ChatContext::current();
        view! { <span data-chat=ctx.chat_id_str()>{ctx.endpoint}</span> }
    }

    #[test]
    fn children_see_provided_chat_id() {
        let id = ChatId::parse("abc").unwrap();
        let html = render(move || {
            view! {
                <ChatProvider chat_id=Some(id)>
                    <ContextReader/>
                </ChatProvider>
            }
        });
        assert!(html.contains(r#"data-chat="abc""#));
        assert!(html.contains("/api/chat"));
    }

    #[test]
    fn siblings_after_provider_see_default_context() {
        let id = ChatId::parse("abc").unwrap();
        let html = render(move || {
            view! {
                <ChatProvider chat_id=Some(id)>
                    <span/>
                </ChatProvider>
                <ContextReader/>
            }
        });
        let provider_end = html.find("</div>").unwrap();
        let sibling = &html[provider_end..];
        assert!(sibling.contains("/api/chat"));
        assert!(!sibling.contains("data-chat="));
        assert!(!html.contains("abc"));
    }

    #[test]
    fn default_context_outside_provider() {
        let html = render(|| view! { <ContextReader/> });
        assert!(!html.contains("data-chat"));
        assert_eq!(ChatContext::default().endpoint, CHAT_ENDPOINT);
    }
}
