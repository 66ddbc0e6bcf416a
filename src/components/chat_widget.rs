//! Live chat panel for one service request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the customer request page and the technician job page while the
//! request has an assigned technician. Owns the room's push channel for as long
//! as it is mounted.
//!
//! DESIGN
//! ======
//! History arrives over REST and live lines over the push channel; both merge
//! into one `ChatState` keyed by message id. Sent lines are not appended
//! locally: the server broadcasts them back to the room, sender included.

use leptos::prelude::*;

use crate::net::chat_socket::{ChatChannel, RoomSession, load_history};
use crate::net::types::ChatMessage;
use crate::state::auth::use_auth;
use crate::state::chat::{ChannelStatus, ChatState};
use crate::util::browser;
use crate::util::format;

#[component]
pub fn ChatWidget(#[prop(into)] request_id: String) -> impl IntoView {
    let auth = use_auth();
    let chat = RwSignal::new(ChatState::new(request_id.clone()));
    let draft = RwSignal::new(String::new());
    let list_ref = NodeRef::<leptos::html::Div>::new();

    let token = auth.state.with_untracked(|s| s.token().map(str::to_owned));
    let api = auth.api();
    let channel = ChatChannel::open(&auth.config().socket_base, RoomSession::new(token, request_id), chat, api.clone());
    browser::spawn(load_history(api, chat));

    {
        let channel = channel.clone();
        on_cleanup(move || channel.close());
    }

    let my_id = auth.state.with_untracked(|s| s.user().map(|u| u.id.clone()).unwrap_or_default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if channel.send(&draft.get_untracked()) {
            draft.set(String::new());
        }
    };

    let connected = move || chat.with(|c| c.status == ChannelStatus::Connected);

    view! {
        <section class="chat-widget">
            <header class="chat-widget__header">
                <h3>"Chat"</h3>
                <span
                    class="chat-widget__status"
                    class:chat-widget__status--live=connected
                    title=move || chat.with(|c| c.last_error.clone().unwrap_or_default())
                >
                    {move || chat.with(|c| c.status.label())}
                </span>
            </header>
            <div class="chat-widget__messages" node_ref=list_ref>
                <Show when=move || chat.with(|c| c.history_loaded && c.messages.is_empty())>
                    <p class="chat-widget__empty">"No messages yet."</p>
                </Show>
                {move || {
                    let my_id = my_id.clone();
                    chat.with(|c| c.messages.clone())
                        .into_iter()
                        .map(|m| {
                            let mine = m.sender_id == my_id;
                            view! { <ChatBubble message=m mine=mine/> }
                        })
                        .collect_view()
                }}
            </div>
            <form class="chat-widget__composer" on:submit=on_send>
                <input
                    class="field__input"
                    placeholder=move || if connected() { "Type a message" } else { "Connecting..." }
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || !connected() || draft.with(|d| d.trim().is_empty())
                >
                    "Send"
                </button>
            </form>
        </section>
    }
}

#[component]
fn ChatBubble(message: ChatMessage, mine: bool) -> impl IntoView {
    let time = format::time_of_day(&message.timestamp);
    view! {
        <div class="chat-bubble" class:chat-bubble--mine=mine>
            <span class="chat-bubble__role">{message.sender_role.label()}</span>
            <p class="chat-bubble__content">{message.content}</p>
            <time class="chat-bubble__time">{time}</time>
        </div>
    }
}
