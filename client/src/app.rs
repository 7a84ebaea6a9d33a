//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};
use session::Access;

use crate::components::{admin_layout::AdminLayout, guard::Guard};
use crate::pages::{
    chat::ChatPage, dashboard::DashboardPage, history::HistoryPage, intent_detail::IntentDetailPage,
    intents::IntentsPage, login::LoginPage, register::RegisterPage, training_detail::TrainingDetailPage,
    training_history::TrainingHistoryPage, users::UsersPage,
};
use crate::state::session::new_session;

/// Root application component.
///
/// Provides the shared session store and sets up client-side routing. Every
/// `/admin` route sits behind an admin guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(new_session()));

    view! {
        <Title text="Chatbot PMB"/>

        <Router>
            <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("intents") view=IntentsPage/>
                    <Route path=(StaticSegment("intents"), ParamSegment("id")) view=IntentDetailPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("training") view=TrainingHistoryPage/>
                    <Route path=(StaticSegment("training"), ParamSegment("id")) view=TrainingDetailPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    view! {
        <Guard access=Access::Admin>
            <AdminLayout/>
        </Guard>
    }
}
