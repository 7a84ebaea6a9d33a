//! Login page: email + password against `/auth/login`.
//!
//! On success admins land on `/admin`, everyone else on `/`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::ClientSession;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<ClientSession>>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
            leptos::task::spawn_local(async move {
                match crate::state::session::login(session, &email_value, &password_value).await {
                    Ok(user) => {
                        navigate(session::landing_path(&user), leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = session;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"Login"</h1>
                    <p>"Chatbot PMB - UK De La Salle"</p>
                </div>
                <Show when=move || error.with(Option::is_some)>
                    <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form on:submit=on_submit>
                    <label class="form-group">
                        <span>"Email"</span>
                        <input
                            class="form-control"
                            type="email"
                            placeholder="email@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-group">
                        <span>"Password"</span>
                        <input
                            class="form-control"
                            type="password"
                            placeholder="••••••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { "Masuk" }}
                    </button>
                </form>
                <p class="auth-card__switch">"Belum punya akun? " <A href="/register">"Daftar di sini"</A></p>
                <p class="auth-card__back"><A href="/">"← Kembali ke Chatbot"</A></p>
            </div>
        </div>
    }
}
