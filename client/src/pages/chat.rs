//! Public landing page hosting the chat widget.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::chat_bot::ChatBot;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <ChatBot/>
            <p class="chat-page__footer">
                <A href="/login">"Login"</A>
                " · "
                <A href="/register">"Daftar"</A>
            </p>
        </div>
    }
}
