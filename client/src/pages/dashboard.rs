//! Admin index route.

use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="card card--padded">
            <h2>"Selamat Datang di Admin Dashboard"</h2>
            <p>"Pilih menu disebelah kiri untuk mengelola data."</p>
        </div>
    }
}
