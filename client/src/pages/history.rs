//! Paged chat log for administrators.

use leptos::prelude::*;
use wire::ChatLog;

use crate::state::history::{Pager, confidence_cell};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let logs = RwSignal::new(Vec::<ChatLog>::new());
    let page = RwSignal::new(0_u64);
    let total = RwSignal::new(0_u64);
    let loading = RwSignal::new(true);

    // Only `page` is tracked; `total` is written by the fetch.
    Effect::new(move |_| {
        let current = page.get();
        loading.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_chat_history(current).await {
                Ok(history) => {
                    total.set(history.total);
                    logs.set(history.logs);
                }
                Err(err) => log::warn!("history: page {current} failed: {err}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = current;
    });

    let pager = move || Pager { page: page.get(), total: total.get() };

    let rows = move || {
        logs.get()
            .into_iter()
            .map(|entry| {
                view! {
                    <tr>
                        <td class="nowrap muted">{entry.created_at.format_short()}</td>
                        <td class="strong">{entry.user_message}</td>
                        <td class="muted">{entry.bot_response}</td>
                        <td>
                            <span class="badge">{entry.intent_tag.unwrap_or_else(|| "-".to_owned())}</span>
                        </td>
                        <td>{confidence_cell(entry.confidence)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page-header">
            <div class="page-title">
                <h1>"Riwayat Percakapan"</h1>
                <p>{move || format!("Total: {} Logs", total.get())}</p>
            </div>
        </div>
        <div class="card">
            <Show when=move || !loading.get() fallback=|| view! { <div class="card__loading">"Loading..."</div> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Waktu"</th>
                            <th>"Pertanyaan User"</th>
                            <th>"Jawaban Bot"</th>
                            <th>"Intent"</th>
                            <th>"Confidence"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
            <div class="pagination">
                <button
                    class="btn btn-secondary"
                    disabled=move || !pager().has_previous()
                    on:click=move |_| page.set(pager().previous().page)
                >
                    "Previous"
                </button>
                <span>{move || format!("Page {}", page.get() + 1)}</span>
                <button
                    class="btn btn-secondary"
                    disabled=move || !pager().has_next()
                    on:click=move |_| page.set(pager().next().page)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
