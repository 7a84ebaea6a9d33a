//! Visitor registration page.
//!
//! The form is validated locally first; mismatched or short passwords never
//! reach the backend. After success the page shows a confirmation and moves
//! to `/login` two seconds later.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::ClientSession;

/// Delay before leaving the confirmation screen.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<ClientSession>>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let whatsapp = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let success = RwSignal::new(false);

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
            let submitted = session::RegistrationForm {
                full_name: full_name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
                whatsapp: whatsapp.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match crate::state::session::register(session, &submitted).await {
                    Ok(user) => {
                        log::info!("register: created user_id={}", user.id);
                        success.set(true);
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate("/login", leptos_router::NavigateOptions::default());
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
            <Show when=move || success.get()>
                <div class="auth-card auth-card--success">
                    <h2>"Registrasi Berhasil!"</h2>
                    <p>"Mengalihkan ke halaman login..."</p>
                </div>
            </Show>
            <div class="auth-card" class:is-hidden=move || success.get()>
                <div class="auth-card__header">
                    <h1>"Daftar Akun"</h1>
                    <p>"Chatbot PMB - UK De La Salle"</p>
                </div>
                <Show when=move || error.with(Option::is_some)>
                    <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form on:submit=on_submit>
                    {field(full_name, "Nama Lengkap", "text", "John Doe")}
                    {field(email, "Email", "email", "email@example.com")}
                    {field(whatsapp, "Nomor WhatsApp", "tel", "08123456789")}
                    {field(password, "Password", "password", "Minimal 6 karakter")}
                    {field(confirm_password, "Konfirmasi Password", "password", "Ulangi password")}
                    <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { "Daftar" }}
                    </button>
                </form>
                <p class="auth-card__switch">"Sudah punya akun? " <A href="/login">"Login di sini"</A></p>
                <p class="auth-card__back"><A href="/">"← Kembali ke Chatbot"</A></p>
            </div>
        </div>
    }
}

/// One labelled input. Only the WhatsApp number is optional.
fn field(value: RwSignal<String>, label: &'static str, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <label class="form-group">
            <span>{label}</span>
            <input
                class="form-control"
                type=kind
                placeholder=placeholder
                required=kind != "tel"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
