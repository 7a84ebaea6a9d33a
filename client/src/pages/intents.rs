//! Intent dataset page: list, create/edit form, new-data inbox, retrain.
//!
//! SYSTEM CONTEXT
//! ==============
//! The inbox lists logged questions the classifier has not been trained on.
//! "Tambah" copies one into the form's pattern list; retraining clears the
//! inbox server-side, so it is reloaded afterwards.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use wire::{IntentSummary, NewDataCandidate, confidence_percent};

use crate::state::intents::IntentForm;
use crate::util::dialog;

#[component]
pub fn IntentsPage() -> impl IntoView {
    let intents = RwSignal::new(Vec::<IntentSummary>::new());
    let inbox = RwSignal::new(Vec::<NewDataCandidate>::new());
    let loading = RwSignal::new(true);
    let retraining = RwSignal::new(false);
    let form = RwSignal::new(IntentForm::default());

    load_intents(intents, loading);
    load_inbox(inbox);

    let on_retrain = move |_| {
        if retraining.get_untracked()
            || !dialog::confirm("Apakah anda yakin ingin melatih ulang model? Ini mungkin memakan waktu.")
        {
            return;
        }
        retraining.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::retrain().await {
                Ok(result) => {
                    dialog::alert(&result.message);
                    load_inbox(inbox);
                }
                Err(err) => dialog::alert(&format!("Error: {}", err.user_message())),
            }
            retraining.set(false);
        });
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let payload = current.payload();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let saved = match current.editing {
                Some(id) => crate::net::api::update_intent(id, &payload.into()).await,
                None => crate::net::api::create_intent(&payload).await,
            };
            match saved {
                Ok(intent) => {
                    log::info!("intents: saved {} ({})", intent.tag, intent.id);
                    form.set(IntentForm::default());
                    load_intents(intents, loading);
                }
                Err(err) => dialog::alert(&format!("Gagal menyimpan intent: {}", err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = payload;
    };

    let on_edit = move |intent_id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_intent(intent_id).await {
                Ok(intent) => form.set(IntentForm::edit(&intent)),
                Err(err) => dialog::alert(&format!("Error: {}", err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = intent_id;
    };

    let on_delete = move |intent_id: i64| {
        if !dialog::confirm("Hapus intent ini?") {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_intent(intent_id).await {
                Ok(_) => load_intents(intents, loading),
                Err(err) => dialog::alert(&format!("Error deleting: {}", err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = intent_id;
    };

    let inbox_view = move || {
        let items = inbox.get();
        if items.is_empty() {
            return ().into_any();
        }
        let count = items.len();
        view! {
            <div class="card inbox">
                <div class="inbox__header">
                    <h3>{format!("Inbox Pertanyaan Baru ({count})")}</h3>
                    <small>"Data ini belum dilatih"</small>
                </div>
                <table class="table table--compact">
                    <thead>
                        <tr><th>"Pertanyaan User"</th><th>"Prediksi Intent"</th><th class="align-right">"Aksi"</th></tr>
                    </thead>
                    <tbody>
                        {items
                            .into_iter()
                            .map(|item| {
                                let predicted = format!(
                                    "{} ({}%)",
                                    item.predicted_intent.as_deref().unwrap_or("?"),
                                    confidence_percent(item.confidence)
                                );
                                let text = item.user_message.clone();
                                view! {
                                    <tr>
                                        <td class="strong">{item.user_message}</td>
                                        <td><span class="badge badge--muted">{predicted}</span></td>
                                        <td class="align-right">
                                            <button class="btn btn-sm btn-primary" on:click=move |_| form.update(|f| f.add_pattern(&text))>
                                                "+ Tambah"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    let form_view = move || {
        if !form.with(|f| f.open) {
            return ().into_any();
        }
        view! {
            <div class="card card--padded">
                <h3>{move || form.with(IntentForm::title)}</h3>
                <form on:submit=on_save>
                    <label class="form-group">
                        <span>"Tag (Kategori)"</span>
                        <input
                            class="form-control"
                            placeholder="misal: info_biaya"
                            required
                            prop:value=move || form.with(|f| f.tag.clone())
                            on:input=move |ev| form.update(|f| f.tag = event_target_value(&ev))
                        />
                    </label>
                    <div class="form-grid">
                        <label class="form-group">
                            <span>"Patterns (Pertanyaan User)"</span>
                            <small>"Satu baris satu kalimat"</small>
                            <textarea
                                class="form-control"
                                rows="6"
                                required
                                prop:value=move || form.with(|f| f.patterns.clone())
                                on:input=move |ev| form.update(|f| f.patterns = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form-group">
                            <span>"Responses (Jawaban Bot)"</span>
                            <small>"Satu baris satu variasi jawaban"</small>
                            <textarea
                                class="form-control"
                                rows="6"
                                required
                                prop:value=move || form.with(|f| f.responses.clone())
                                on:input=move |ev| form.update(|f| f.responses = event_target_value(&ev))
                            ></textarea>
                        </label>
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">"Simpan"</button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| form.update(|f| f.open = false)>
                            "Batal"
                        </button>
                    </div>
                </form>
            </div>
        }
        .into_any()
    };

    let rows = move || {
        intents
            .get()
            .into_iter()
            .map(|intent| {
                let id = intent.id;
                view! {
                    <tr>
                        <td><A href=format!("/admin/intents/{id}") attr:class="badge">{intent.tag}</A></td>
                        <td>{format!("{} patterns", intent.pattern_count)}</td>
                        <td>{format!("{} responses", intent.response_count)}</td>
                        <td class="align-right">
                            <button class="btn-icon" title="Edit" on:click=move |_| on_edit(id)>"✎"</button>
                            <button class="btn-icon btn-icon--danger" title="Hapus" on:click=move |_| on_delete(id)>"🗑"</button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <div>"Loading..."</div> }>
            <div class="page-header">
                <div class="page-title">
                    <h1>"Dataset Intent"</h1>
                    <p>"Kelola data pertanyaan dan jawaban chatbot"</p>
                </div>
                <div class="page-actions">
                    <button class="btn btn-secondary" on:click=on_retrain disabled=move || retraining.get()>
                        {move || if retraining.get() { "Melatih Model..." } else { "Retrain Model" }}
                    </button>
                    <button class="btn btn-primary" on:click=move |_| form.set(IntentForm::new_intent())>
                        "+ Tambah Intent"
                    </button>
                </div>
            </div>
            {inbox_view}
            {form_view}
            <div class="card">
                <table class="table">
                    <thead>
                        <tr><th>"Tag"</th><th>"Patterns"</th><th>"Responses"</th><th class="align-right">"Aksi"</th></tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </Show>
    }
}

fn load_intents(intents: RwSignal<Vec<IntentSummary>>, loading: RwSignal<bool>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_intents().await {
            Ok(list) => intents.set(list),
            Err(err) => log::warn!("intents: list failed: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    let _ = (intents, loading);
}

fn load_inbox(inbox: RwSignal<Vec<NewDataCandidate>>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_new_data().await {
            Ok(items) => inbox.set(items),
            Err(err) => log::warn!("intents: new data failed: {err}"),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = inbox;
}
