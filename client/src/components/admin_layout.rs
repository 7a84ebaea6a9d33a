//! Admin shell: sidebar navigation around the nested admin routes.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::state::session::{self, ClientSession};

/// Sidebar + content outlet for every `/admin/*` page.
///
/// Logging out only resets the session; the surrounding guard then resolves
/// it again and redirects to `/login`.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<ClientSession>>();

    let user_name = move || session.with(|s| s.user().map(|u| u.full_name.clone()).unwrap_or_default());
    let user_email = move || session.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default());
    let on_logout = move |_| {
        if let Err(err) = session::logout(session) {
            log::warn!("logout: {err}");
            crate::util::dialog::alert(&err.user_message());
        }
    };

    view! {
        <div class="admin-container">
            <aside class="admin-sidebar">
                <div class="sidebar-header">
                    <h2>"PMB Admin"</h2>
                    <span class="badge">"v2.0"</span>
                </div>
                <nav class="sidebar-nav">
                    <A href="/admin" exact=true attr:class="nav-item">"Dashboard"</A>
                    <A href="/admin/intents" attr:class="nav-item">"Dataset & Intents"</A>
                    <A href="/admin/history" attr:class="nav-item">"Chat History"</A>
                    <A href="/admin/training" attr:class="nav-item">"Training History"</A>
                    <A href="/admin/users" attr:class="nav-item">"Users"</A>
                    <div class="nav-divider"></div>
                    <a href="/" target="_blank" class="nav-item">"Live Chatbot"</a>
                </nav>
                <div class="sidebar-footer">
                    <div class="sidebar-user">
                        <span class="sidebar-user__name">{user_name}</span>
                        <span class="sidebar-user__email">{user_email}</span>
                    </div>
                    <button class="btn btn-secondary sidebar-logout" on:click=on_logout>"Logout"</button>
                </div>
            </aside>
            <main class="admin-content">
                <Outlet/>
            </main>
        </div>
    }
}
