//! One training run: data split, accuracy and loss, confusion matrix and
//! classification report.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::TrainingRunDetail;
use wire::training::split_ratio_label;

use crate::state::training::{fraction_band, fraction_label, heat_style, loss_label, report_rows};

#[component]
pub fn TrainingDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let detail = RwSignal::new(None::<TrainingRunDetail>);

    Effect::new(move |_| {
        let Some(run_id) = params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok())) else {
            navigate("/admin/training", NavigateOptions::default());
            return;
        };
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_training_run(run_id).await {
                    Ok(loaded) => detail.set(Some(loaded)),
                    Err(err) => {
                        log::warn!("training detail: load {run_id} failed: {err}");
                        crate::util::dialog::alert("Training history tidak ditemukan");
                        navigate("/admin/training", NavigateOptions::default());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = run_id;
    });

    let body = move || {
        let Some(run) = detail.get() else {
            return view! { <div>"Loading..."</div> }.into_any();
        };
        view! {
            <div class="page-header">
                <div class="page-title">
                    <A href="/admin/training" attr:class="back-link">"← Kembali"</A>
                    <h1>{format!("Training #{}", run.id)}</h1>
                    <p>
                        {run.trained_at.map_or_else(|| "-".to_owned(), |t| t.format_long())}
                        {run.epochs_run.map(|e| format!(" • {e} epochs"))}
                        {run.num_classes.map(|n| format!(" • {n} kelas"))}
                    </p>
                </div>
            </div>
            {split_section(&run)}
            {accuracy_section(&run)}
            {confusion_section(&run)}
            {report_section(&run)}
        }
        .into_any()
    };

    view! { {body} }
}

fn split_section(run: &TrainingRunDetail) -> AnyView {
    let bar = |label: &'static str, samples: u64, class: &'static str| {
        let percent = run.split_percent(samples);
        view! {
            <div class="split__item">
                <div class="split__label">
                    <span>{label}</span>
                    <span>{format!("{samples} ({percent}%)")}</span>
                </div>
                <div class="split__track">
                    <div class=format!("split__fill {class}") style=format!("width: {percent}%")></div>
                </div>
            </div>
        }
    };
    view! {
        <div class="card card--padded">
            <h3>"Pembagian Data"</h3>
            <p class="muted">
                {format!("Total {} sampel • rasio {}", run.total_samples, split_ratio_label(run.split_ratio.as_ref()))}
            </p>
            {bar("Train", run.train_samples, "split__fill--train")}
            {bar("Validation", run.val_samples, "split__fill--val")}
            {bar("Test", run.test_samples, "split__fill--test")}
        </div>
    }
    .into_any()
}

fn accuracy_section(run: &TrainingRunDetail) -> AnyView {
    let tile = |label: &'static str, accuracy: f64, loss: Option<f64>| {
        view! {
            <div class="metric-tile">
                <span class="metric-tile__label">{label}</span>
                <span class=format!("metric-tile__value accuracy {}", fraction_band(accuracy))>
                    {fraction_label(accuracy)}
                </span>
                <span class="metric-tile__sub">{format!("Loss: {}", loss_label(loss))}</span>
            </div>
        }
    };
    view! {
        <div class="card card--padded">
            <h3>"Akurasi Model"</h3>
            <div class="metric-grid">
                {tile("Train", run.train_accuracy, run.train_loss)}
                {tile("Validation", run.val_accuracy, run.val_loss)}
                {tile("Test", run.test_accuracy, run.test_loss)}
            </div>
        </div>
    }
    .into_any()
}

fn confusion_section(run: &TrainingRunDetail) -> AnyView {
    if run.confusion_matrix.is_empty() {
        return view! {
            <div class="card card--padded">
                <h3>"Confusion Matrix"</h3>
                <p class="muted">"Confusion matrix tidak tersedia"</p>
            </div>
        }
        .into_any();
    }
    let max = run.confusion_max();
    let name = |index: usize| run.class_names.get(index).cloned().unwrap_or_else(|| index.to_string());
    let header = (0..run.confusion_matrix.len()).map(|col| view! { <th class="matrix__label">{name(col)}</th> }).collect_view();
    let rows = run
        .confusion_matrix
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let cells = cells
                .iter()
                .enumerate()
                .map(|(col, &value)| {
                    let class = if row == col { "matrix__cell matrix__cell--diagonal" } else { "matrix__cell" };
                    view! { <td class=class style=heat_style(value, max)>{value}</td> }
                })
                .collect_view();
            view! {
                <tr>
                    <th class="matrix__label">{name(row)}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();
    view! {
        <div class="card card--padded">
            <h3>"Confusion Matrix"</h3>
            <div class="matrix__scroll">
                <table class="matrix">
                    <thead>
                        <tr>
                            <th class="matrix__corner">"Actual \\ Predicted"</th>
                            {header}
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
    .into_any()
}

fn report_section(run: &TrainingRunDetail) -> AnyView {
    let rows = report_rows(run)
        .into_iter()
        .map(|row| {
            view! {
                <tr class:report__summary=row.summary>
                    <td class="strong">{row.label}</td>
                    <td>{row.precision}</td>
                    <td>{row.recall}</td>
                    <td>{row.f1_score}</td>
                    <td>{row.support}</td>
                </tr>
            }
        })
        .collect_view();
    view! {
        <div class="card card--padded">
            <h3>"Classification Report"</h3>
            <table class="table table--compact">
                <thead>
                    <tr>
                        <th>"Kelas"</th>
                        <th>"Precision"</th>
                        <th>"Recall"</th>
                        <th>"F1-Score"</th>
                        <th>"Support"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
