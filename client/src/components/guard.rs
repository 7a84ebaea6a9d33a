//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected views. The render-or-redirect decision comes from
//! [`session::evaluate`] over the current session snapshot; a denied visitor
//! gets a declarative `<Redirect/>` instead of a navigation call from render.
//! Mounting while the session is still initializing starts resolution.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;
use session::{Access, GuardState};

use crate::state::session::ClientSession;

/// Render `children` only when the session satisfies `access`.
///
/// `Access::Authenticated` sends anonymous visitors to `/login`;
/// `Access::Admin` additionally sends non-admins to `/`.
#[component]
pub fn Guard(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<ClientSession>>();

    Effect::new(move || {
        if session.with(|s| s.session().is_resolved()) {
            return;
        }
        log::debug!("guard: session initializing, resolving token");
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(crate::state::session::initialize(session));
    });

    let state = Memo::new(move |_| session.with(|s| session::evaluate(access, s.session())));

    move || match state.get() {
        GuardState::Initializing => view! { <div class="guard-loading">"Loading..."</div> }.into_any(),
        GuardState::Denied(target) => {
            log::info!("guard: {access:?} denied, redirecting to {}", target.path());
            view! { <Redirect path=target.path()/> }.into_any()
        }
        GuardState::Allowed => children().into_any(),
    }
}
