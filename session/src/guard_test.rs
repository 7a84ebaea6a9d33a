use super::*;
use wire::{Role, User};

fn user(role: Role) -> User {
    User {
        id: 1,
        full_name: "Ana".to_owned(),
        email: "a@x.com".to_owned(),
        role,
        whatsapp: None,
        is_active: true,
        created_at: None,
    }
}

#[test]
fn initializing_session_waits_for_both_guards() {
    let session = Session::initializing();
    assert_eq!(evaluate(Access::Authenticated, &session), GuardState::Initializing);
    assert_eq!(evaluate(Access::Admin, &session), GuardState::Initializing);
}

#[test]
fn anonymous_session_is_sent_to_login() {
    let session = Session::anonymous();
    assert_eq!(evaluate(Access::Authenticated, &session), GuardState::Denied(Redirect::Login));
    assert_eq!(evaluate(Access::Admin, &session), GuardState::Denied(Redirect::Login));
}

#[test]
fn regular_user_passes_auth_guard_but_not_admin_guard() {
    let session = Session::signed_in("T1".to_owned(), user(Role::User));
    assert!(evaluate(Access::Authenticated, &session).is_allowed());
    assert_eq!(evaluate(Access::Admin, &session), GuardState::Denied(Redirect::Home));
}

#[test]
fn unknown_role_is_treated_as_non_admin() {
    let session = Session::signed_in("T1".to_owned(), user(Role::Other));
    assert_eq!(evaluate(Access::Admin, &session), GuardState::Denied(Redirect::Home));
}

#[test]
fn admin_passes_both_guards() {
    let session = Session::signed_in("T1".to_owned(), user(Role::Admin));
    assert!(evaluate(Access::Authenticated, &session).is_allowed());
    assert!(evaluate(Access::Admin, &session).is_allowed());
}

#[test]
fn admin_guard_never_allows_without_admin_user() {
    for (has_user, admin) in [(false, false), (false, true), (true, false), (true, true)] {
        let session = if has_user {
            Session::signed_in("T".to_owned(), user(if admin { Role::Admin } else { Role::User }))
        } else {
            Session::anonymous()
        };
        let allowed = evaluate(Access::Admin, &session).is_allowed();
        assert_eq!(allowed, has_user && admin, "user={has_user} admin={admin}");
    }
}

#[test]
fn redirect_paths() {
    assert_eq!(Redirect::Login.path(), "/login");
    assert_eq!(Redirect::Home.path(), "/");
}

#[test]
fn landing_path_depends_on_role() {
    assert_eq!(landing_path(&user(Role::Admin)), "/admin");
    assert_eq!(landing_path(&user(Role::User)), "/");
}
