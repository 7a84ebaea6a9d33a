//! Public chat widget: greeting, suggested questions, message thread, input.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::chat::{ChatState, SUGGESTIONS, Sender};

#[component]
pub fn ChatBot() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = None;
        chat.update(|c| accepted = c.begin_send(&input.get_untracked()));
        let Some(message) = accepted else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat(&message).await {
                Ok(reply) => chat.update(|c| c.receive(reply)),
                Err(err) => {
                    log::warn!("chat: {err}");
                    chat.update(ChatState::fail);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("chat: dropping {message:?} outside the browser");
            chat.update(ChatState::fail);
        }
    };

    let thread = move || {
        chat.get()
            .messages
            .into_iter()
            .map(|msg| {
                let class = match (msg.sender, msg.is_error) {
                    (Sender::User, _) => "message user",
                    (Sender::Bot, false) => "message bot",
                    (Sender::Bot, true) => "message bot error",
                };
                let avatar = (msg.sender == Sender::Bot)
                    .then(|| view! { <div class="message-avatar"><img src="/logo-delasalle.png" alt="Bot"/></div> });
                view! {
                    <div class=class>
                        {avatar}
                        <div class="message-content">
                            <p>{msg.text}</p>
                            {msg.meta.map(|meta| view! { <span class="message-meta">{meta}</span> })}
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let suggestions = move || {
        if !chat.with(ChatState::show_suggestions) {
            return ().into_any();
        }
        view! {
            <div class="suggestions">
                <p>"Pertanyaan populer:"</p>
                <div class="suggestion-chips">
                    {SUGGESTIONS
                        .into_iter()
                        .map(|q| view! {
                            <button class="suggestion-chip" on:click=move |_| input.set(q.to_owned())>{q}</button>
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="chatbot-container">
            <div class="chatbot-header">
                <div class="header-avatar"><img src="/logo-delasalle.png" alt="De La Salle Logo"/></div>
                <div class="header-info">
                    <h1>"Chatbot PMB"</h1>
                    <p>"UK De La Salle Manado"</p>
                </div>
                <div class="header-status"><span class="status-dot"></span>"Online"</div>
            </div>

            <div class="chatbot-messages">
                {thread}
                <Show when=move || chat.with(|c| c.busy)>
                    <div class="message bot loading">
                        <div class="message-content">
                            <div class="typing-indicator"><span></span><span></span><span></span></div>
                        </div>
                    </div>
                </Show>
            </div>

            {suggestions}

            <form class="chatbot-input" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Ketik pertanyaan Anda..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    disabled=move || chat.with(|c| c.busy)
                />
                <button type="submit" disabled=move || chat.with(|c| c.busy) || input.with(|v| v.trim().is_empty())>
                    "Kirim"
                </button>
            </form>
        </div>
    }
}
