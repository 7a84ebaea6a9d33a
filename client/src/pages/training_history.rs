//! List of past training runs.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wire::TrainingRunSummary;
use wire::training::split_ratio_label;

use crate::state::training::percent_band;
use crate::util::dialog;

#[component]
pub fn TrainingHistoryPage() -> impl IntoView {
    let runs = RwSignal::new(Vec::<TrainingRunSummary>::new());
    let loading = RwSignal::new(true);
    let open_run = RwSignal::new(None::<i64>);
    let navigate = use_navigate();

    load_runs(runs, loading);

    Effect::new(move || {
        if let Some(run_id) = open_run.get() {
            open_run.set(None);
            navigate(&format!("/admin/training/{run_id}"), NavigateOptions::default());
        }
    });

    let on_delete = move |run_id: i64| {
        if !dialog::confirm("Hapus history training ini?") {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_training_run(run_id).await {
                Ok(_) => runs.update(|list| list.retain(|run| run.id != run_id)),
                Err(err) => dialog::alert(&format!("Gagal menghapus: {}", err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = run_id;
    };

    let accuracy_cell = |percent: f64| {
        view! { <span class=format!("accuracy {}", percent_band(percent))>{format!("{percent:.2}%")}</span> }
    };

    let table = move || {
        let list = runs.get();
        if list.is_empty() {
            return view! {
                <div class="empty-state">
                    <h3>"Belum Ada Training"</h3>
                    <p>"Klik \"Retrain Model\" di halaman Dataset untuk mulai training."</p>
                </div>
            }
            .into_any();
        }
        view! {
            <table class="table table--clickable">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Waktu"</th>
                        <th>"Split"</th>
                        <th>"Epochs"</th>
                        <th>"Samples"</th>
                        <th>"Train"</th>
                        <th>"Val"</th>
                        <th>"Test"</th>
                        <th class="align-right">"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    {list
                        .into_iter()
                        .map(|run| {
                            let id = run.id;
                            view! {
                                <tr on:click=move |_| open_run.set(Some(id))>
                                    <td>{id}</td>
                                    <td class="nowrap">{run.trained_at.map_or_else(|| "-".to_owned(), |t| t.format_short())}</td>
                                    <td>{split_ratio_label(run.split_ratio.as_ref())}</td>
                                    <td>{run.epochs_run.map_or_else(|| "-".to_owned(), |e| e.to_string())}</td>
                                    <td>{run.total_samples.map_or_else(|| "-".to_owned(), |n| n.to_string())}</td>
                                    <td>{accuracy_cell(run.train_accuracy)}</td>
                                    <td>{accuracy_cell(run.val_accuracy)}</td>
                                    <td>{accuracy_cell(run.test_accuracy)}</td>
                                    <td class="align-right">
                                        <button
                                            class="btn-icon btn-icon--danger"
                                            title="Hapus"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                on_delete(id);
                                            }
                                        >
                                            "🗑"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="page-header">
            <div class="page-title">
                <h1>"Training History"</h1>
                <p>{move || format!("Total: {} Training", runs.with(Vec::len))}</p>
            </div>
        </div>
        <div class="card">
            <Show when=move || !loading.get() fallback=|| view! { <div class="card__loading">"Loading..."</div> }>
                {table}
            </Show>
        </div>
    }
}

fn load_runs(runs: RwSignal<Vec<TrainingRunSummary>>, loading: RwSignal<bool>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_training_runs().await {
            Ok(list) => runs.set(list),
            Err(err) => log::warn!("training: list failed: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    let _ = (runs, loading);
}
