//! User management: visitor accounts and administrators.
//!
//! Every call here is bearer-authenticated with the session token.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use wire::{AdminCreate, Timestamp, User};

use crate::state::session::{self, ClientSession};
use crate::util::dialog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserTab {
    #[default]
    Users,
    Admins,
}

impl UserTab {
    pub fn label(self, count: usize) -> String {
        match self {
            Self::Users => format!("Pengguna ({count})"),
            Self::Admins => format!("Admin ({count})"),
        }
    }

    /// The WhatsApp column only exists for visitor accounts.
    pub fn shows_whatsapp(self) -> bool {
        self == Self::Users
    }
}

pub fn created_label(created_at: Option<Timestamp>) -> String {
    created_at.map_or_else(|| "-".to_owned(), Timestamp::format_date)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Directory {
    users: Vec<User>,
    admins: Vec<User>,
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<ClientSession>>();
    let directory = RwSignal::new(Directory::default());
    let tab = RwSignal::new(UserTab::Users);
    let loading = RwSignal::new(true);
    let modal_open = RwSignal::new(false);
    let form = RwSignal::new(AdminCreate::default());
    let form_error = RwSignal::new(None::<String>);

    load_directory(session, directory, loading);

    let on_delete = move |user_id: i64| {
        if !dialog::confirm("Yakin ingin menghapus user ini?") {
            return;
        }
        let Some(token) = session::token(session) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&token, user_id).await {
                Ok(_) => load_directory(session, directory, loading),
                Err(err) => dialog::alert(&err.user_message()),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (token, user_id);
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);
        let request = match ::session::admin_request(&form.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                form_error.set(Some(err.to_string()));
                return;
            }
        };
        let Some(token) = session::token(session) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_admin(&token, &request).await {
                Ok(admin) => {
                    log::info!("users: created admin {}", admin.id);
                    dialog::alert("Admin berhasil ditambahkan");
                    modal_open.set(false);
                    form.set(AdminCreate::default());
                    load_directory(session, directory, loading);
                }
                Err(err) => form_error.set(Some(err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (token, request);
    };

    let tab_button = move |which: UserTab| {
        view! {
            <button
                class="tab"
                class:tab--active=move || tab.get() == which
                on:click=move |_| tab.set(which)
            >
                {move || {
                    let count = directory.with(|d| match which {
                        UserTab::Users => d.users.len(),
                        UserTab::Admins => d.admins.len(),
                    });
                    which.label(count)
                }}
            </button>
        }
    };

    let table = move || {
        let current = tab.get();
        let list = directory.with(|d| match current {
            UserTab::Users => d.users.clone(),
            UserTab::Admins => d.admins.clone(),
        });
        let whatsapp = current.shows_whatsapp();
        let body = if list.is_empty() {
            let span = if whatsapp { "5" } else { "4" };
            view! { <tr><td colspan=span class="empty">"Tidak ada data"</td></tr> }.into_any()
        } else {
            list.into_iter()
                .map(|user| {
                    let id = user.id;
                    view! {
                        <tr>
                            <td class="strong">{user.full_name}</td>
                            <td>{user.email}</td>
                            {whatsapp.then(|| view! { <td>{user.whatsapp.unwrap_or_else(|| "-".to_owned())}</td> })}
                            <td class="muted">{created_label(user.created_at)}</td>
                            <td class="align-right">
                                <button class="btn-icon btn-icon--danger" title="Hapus" on:click=move |_| on_delete(id)>
                                    "🗑"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        };
        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Nama"</th>
                        <th>"Email"</th>
                        {whatsapp.then(|| view! { <th>"WhatsApp"</th> })}
                        <th>"Terdaftar"</th>
                        <th class="align-right">"Aksi"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        }
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&AdminCreate) -> String, set: fn(&mut AdminCreate, String)| {
        view! {
            <label class="form-group">
                <span>{label}</span>
                <input
                    class="form-control"
                    type=kind
                    required
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="page-header">
            <div class="page-title">
                <h1>"Manajemen Pengguna"</h1>
                <p>"Kelola akun admin dan pengguna chatbot"</p>
            </div>
            <div class="page-actions">
                <Show when=move || tab.get() == UserTab::Admins>
                    <button class="btn btn-primary" on:click=move |_| modal_open.set(true)>"+ Tambah Admin"</button>
                </Show>
            </div>
        </div>
        <div class="tabs">
            {tab_button(UserTab::Users)}
            {tab_button(UserTab::Admins)}
        </div>
        <div class="card">
            <Show when=move || !loading.get() fallback=|| view! { <div class="card__loading">"Loading..."</div> }>
                {table}
            </Show>
        </div>
        <Show when=move || modal_open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"Tambah Admin Baru"</h3>
                    <Show when=move || form_error.with(Option::is_some)>
                        <div class="alert alert--error">{move || form_error.get().unwrap_or_default()}</div>
                    </Show>
                    <form on:submit=on_create>
                        {field("Nama Lengkap", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                        {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                        {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                        <div class="form-actions">
                            <button type="submit" class="btn btn-primary">"Simpan"</button>
                            <button type="button" class="btn btn-secondary" on:click=move |_| modal_open.set(false)>
                                "Batal"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

fn load_directory(session: RwSignal<ClientSession>, directory: RwSignal<Directory>, loading: RwSignal<bool>) {
    let Some(token) = session::token(session) else {
        loading.set(false);
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let (users, admins) =
            futures::join!(crate::net::api::list_regular_users(&token), crate::net::api::list_admins(&token));
        match (users, admins) {
            (Ok(users), Ok(admins)) => directory.set(Directory { users, admins }),
            (Err(err), _) | (_, Err(err)) => log::warn!("users: load failed: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    let _ = (token, directory);
}
