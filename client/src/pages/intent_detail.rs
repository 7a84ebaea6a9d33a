//! Single intent: add and remove individual patterns and responses.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::Intent;

use crate::state::intents::{IntentList, with_added, with_removed};
use crate::util::dialog;

#[component]
pub fn IntentDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let intent = RwSignal::new(None::<Intent>);
    let new_pattern = RwSignal::new(String::new());
    let new_response = RwSignal::new(String::new());

    let intent_id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

    Effect::new(move |_| {
        let Some(id) = intent_id() else {
            navigate("/admin/intents", leptos_router::NavigateOptions::default());
            return;
        };
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_intent(id).await {
                    Ok(loaded) => intent.set(Some(loaded)),
                    Err(err) => {
                        log::warn!("intent detail: load {id} failed: {err}");
                        dialog::alert("Gagal memuat intent");
                        navigate("/admin/intents", leptos_router::NavigateOptions::default());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    let apply = move |list: IntentList, text: String, adding: bool| {
        let Some(current) = intent.get_untracked() else {
            return;
        };
        let update = if adding {
            match with_added(&current, list, &text) {
                Some(update) => update,
                None => return,
            }
        } else {
            with_removed(&current, list, &text)
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_intent(current.id, &update).await {
                Ok(saved) => {
                    intent.set(Some(saved));
                    if adding {
                        match list {
                            IntentList::Patterns => new_pattern.set(String::new()),
                            IntentList::Responses => new_response.set(String::new()),
                        }
                    }
                }
                Err(err) => dialog::alert(&format!("Error: {}", err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = update;
    };

    let on_remove = move |list: IntentList, text: String| {
        let question = match list {
            IntentList::Patterns => "Hapus pattern ini?",
            IntentList::Responses => "Hapus response ini?",
        };
        if dialog::confirm(question) {
            apply(list, text, false);
        }
    };

    let list_section = move |list: IntentList| {
        let (title, empty, placeholder, draft) = match list {
            IntentList::Patterns => {
                ("Patterns (Pertanyaan)", "Belum ada patterns", "Tambah pertanyaan baru...", new_pattern)
            }
            IntentList::Responses => {
                ("Responses (Jawaban)", "Belum ada responses", "Tambah jawaban baru...", new_response)
            }
        };
        let entries = move || {
            intent.with(|current| match (current, list) {
                (Some(i), IntentList::Patterns) => i.pattern_texts(),
                (Some(i), IntentList::Responses) => i.response_texts(),
                (None, _) => Vec::new(),
            })
        };
        let count = move || entries().len();
        view! {
            <div class="card detail-section">
                <div class="detail-section__header">
                    <h3>{title}</h3>
                    <span class="badge">{count}</span>
                </div>
                <form
                    class="detail-section__add"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        apply(list, draft.get_untracked(), true);
                    }
                >
                    <input
                        class="form-control"
                        placeholder=placeholder
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"+"</button>
                </form>
                <ul class="detail-section__list">
                    {move || {
                        let items = entries();
                        if items.is_empty() {
                            return view! { <li class="empty">{empty}</li> }.into_any();
                        }
                        items
                            .into_iter()
                            .map(|text| {
                                let removed = text.clone();
                                view! {
                                    <li>
                                        <span>{text}</span>
                                        <button
                                            class="btn-icon btn-icon--danger"
                                            title="Hapus"
                                            on:click=move |_| on_remove(list, removed.clone())
                                        >
                                            "🗑"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </ul>
            </div>
        }
    };

    view! {
        <Show when=move || intent.with(Option::is_some) fallback=|| view! { <div>"Loading..."</div> }>
            <div class="page-header">
                <div class="page-title">
                    <A href="/admin/intents" attr:class="back-link">"← Kembali"</A>
                    <h1>{move || intent.with(|i| i.as_ref().map(|i| i.tag.clone()).unwrap_or_default())}</h1>
                    <p>"Kelola patterns dan responses untuk intent ini"</p>
                </div>
            </div>
            <div class="detail-grid">
                {list_section(IntentList::Patterns)}
                {list_section(IntentList::Responses)}
            </div>
        </Show>
    }
}
