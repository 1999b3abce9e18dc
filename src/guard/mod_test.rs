use super::*;
use crate::net::types::User;
use crate::session::Session;
use crate::storage::{MemoryStorage, NoopStorage};
use serde_json::Map;
use std::sync::Arc;

fn signed_out_session() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::new()))
}

fn signed_in_session() -> SessionStore {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    store.set(&Session {
        token: "tok123".to_owned(),
        user: User { id: 1, name: "A".to_owned(), email: None, extra: Map::new() },
    });
    store
}

// =============================================================================
// app_guard — protected routes.
// =============================================================================

#[test]
fn dashboard_without_token_redirects_to_login() {
    let decision = app_guard(&signed_out_session(), &RouteTarget::new("/dashboard"));
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            path: "/login".to_owned(),
            query: vec![("redirect".to_owned(), "/dashboard".to_owned())],
        }
    );
}

#[test]
fn redirect_preserves_full_path_with_query() {
    let target = RouteTarget {
        path: "/families",
        full_path: "/families?page=2&search=dupont",
        guest_only: false,
    };
    let decision = app_guard(&signed_out_session(), &target);
    match decision {
        GuardDecision::Redirect { path, query } => {
            assert_eq!(path, "/login");
            assert_eq!(query, vec![(
                "redirect".to_owned(),
                "/families?page=2&search=dupont".to_owned()
            )]);
        }
        GuardDecision::Allow => panic!("expected a redirect"),
    }
}

#[test]
fn dashboard_with_token_is_allowed() {
    let decision = app_guard(&signed_in_session(), &RouteTarget::new("/dashboard"));
    assert!(decision.is_allow());
}

// =============================================================================
// app_guard — public routes and the login bounce.
// =============================================================================

#[test]
fn contact_without_token_is_allowed() {
    let decision = app_guard(&signed_out_session(), &RouteTarget::new("/contact"));
    assert!(decision.is_allow());
}

#[test]
fn every_public_path_is_allowed_signed_out() {
    let session = signed_out_session();
    for path in PUBLIC_PATHS {
        assert!(
            app_guard(&session, &RouteTarget::new(path)).is_allow(),
            "{path} must be reachable signed out"
        );
    }
}

#[test]
fn login_with_token_redirects_home() {
    let decision = app_guard(&signed_in_session(), &RouteTarget::new("/login"));
    assert_eq!(decision, GuardDecision::redirect("/"));
}

#[test]
fn login_without_token_is_allowed() {
    let decision = app_guard(&signed_out_session(), &RouteTarget::new("/login"));
    assert!(decision.is_allow());
}

// =============================================================================
// guest_guard.
// =============================================================================

#[test]
fn guest_route_with_token_redirects_home() {
    let target = RouteTarget { path: "/login", full_path: "/login", guest_only: true };
    let decision = guest_guard(&signed_in_session(), &target);
    assert_eq!(decision, GuardDecision::redirect("/"));
}

#[test]
fn guest_route_without_token_is_allowed() {
    let target = RouteTarget { path: "/login", full_path: "/login", guest_only: true };
    assert!(guest_guard(&signed_out_session(), &target).is_allow());
}

#[test]
fn non_guest_route_with_token_is_allowed() {
    let target = RouteTarget::new("/dashboard");
    assert!(guest_guard(&signed_in_session(), &target).is_allow());
}

// =============================================================================
// Headless contexts — guards cannot decide, so they allow.
// =============================================================================

#[test]
fn guards_allow_without_storage() {
    let session = SessionStore::new(Arc::new(NoopStorage));
    assert!(app_guard(&session, &RouteTarget::new("/dashboard")).is_allow());
    let guest = RouteTarget { path: "/login", full_path: "/login", guest_only: true };
    assert!(guest_guard(&session, &guest).is_allow());
}
