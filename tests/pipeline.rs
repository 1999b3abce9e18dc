//! End-to-end pipeline tests against an in-process HTTP server.
//!
//! These drive the real client over loopback: bearer attachment, the 401
//! eviction/redirect hook, and the login/logout storage contract, with the
//! server scripted per test.

use std::sync::Arc;

use axum::Router;
use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::{delete, get, post};
use serde_json::{Value, json};

use toollab_client::navigate::{Navigator, RecordingNavigator};
use toollab_client::state::Auth;
use toollab_client::storage::{MemoryStorage, Storage};
use toollab_client::{ApiClient, ApiError, Config, Credentials, api};

/// Serve `app` on an ephemeral loopback port, returning the base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    format!("http://{addr}")
}

struct Harness {
    client: ApiClient,
    storage: Arc<MemoryStorage>,
    navigator: Arc<RecordingNavigator>,
}

async fn harness(app: Router) -> Harness {
    let base_url = serve(app).await;
    let storage = Arc::new(MemoryStorage::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let client = ApiClient::new(
        &Config::new(base_url),
        Arc::clone(&storage) as Arc<dyn Storage>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    )
    .expect("build client");
    Harness { client, storage, navigator }
}

fn login_router() -> Router {
    Router::new().route(
        "/api/login",
        post(|| async {
            Json(json!({"token": "tok123", "user": {"id": 1, "name": "A"}}))
        }),
    )
}

fn credentials() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

// =============================================================================
// Login — persistence contract and facade mirror.
// =============================================================================

#[tokio::test]
async fn login_persists_session_and_mirrors_state() {
    let harness = harness(login_router()).await;
    let auth = Auth::new(harness.client.clone());

    let payload = auth.login(&credentials()).await.expect("login succeeds");
    assert_eq!(payload.token, "tok123");
    assert_eq!(payload.user.id, 1);

    // Storage holds exactly the returned session.
    assert_eq!(harness.storage.get_item("auth.token"), Some("tok123".to_owned()));
    let stored_user: Value =
        serde_json::from_str(&harness.storage.get_item("auth.user").expect("user stored"))
            .expect("stored user is JSON");
    assert_eq!(stored_user, json!({"id": 1, "name": "A"}));

    // Facade mirror agrees.
    let state = auth.state();
    assert!(state.is_authenticated);
    assert_eq!(state.user.map(|u| u.name), Some("A".to_owned()));
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn register_persists_session_like_login() {
    let app = Router::new().route(
        "/api/register",
        post(|| async { Json(json!({"token": "tok456", "user": {"id": 2, "name": "B"}})) }),
    );
    let harness = harness(app).await;

    let data = toollab_client::RegisterData {
        name: "B".to_owned(),
        email: "b@c.fr".to_owned(),
        password: "pw".to_owned(),
        password_confirmation: "pw".to_owned(),
        extra: serde_json::Map::new(),
    };
    let payload = api::auth::register(&harness.client, &data).await.expect("register succeeds");
    assert_eq!(payload.token, "tok456");

    assert_eq!(harness.storage.get_item("auth.token"), Some("tok456".to_owned()));
    assert!(harness.storage.get_item("auth.user").is_some());
}

#[tokio::test]
async fn failed_login_records_server_message_and_leaves_store_empty() {
    let app = Router::new().route(
        "/api/login",
        post(|| async {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"message": "Identifiants invalides"})))
        }),
    );
    let harness = harness(app).await;
    let auth = Auth::new(harness.client.clone());

    let error = auth.login(&credentials()).await.expect_err("login must fail");
    assert_eq!(error.server_message(), Some("Identifiants invalides"));

    let state = auth.state();
    assert_eq!(state.error, Some("Identifiants invalides".to_owned()));
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(harness.storage.get_item("auth.token"), None);
    assert_eq!(harness.storage.get_item("auth.user"), None);
}

// =============================================================================
// Bearer attachment — the exact stored token goes out on every request.
// =============================================================================

#[tokio::test]
async fn authenticated_request_carries_exact_bearer_token() {
    let app = login_router().route(
        "/api/classrooms",
        get(|headers: HeaderMap| async move {
            let authorization = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            Json(json!({"authorization": authorization}))
        }),
    );
    let harness = harness(app).await;

    api::auth::login(&harness.client, &credentials()).await.expect("login succeeds");

    let echoed =
        api::classrooms::list_classrooms(&harness.client, &api::ListParams::default())
            .await
            .expect("list succeeds");
    assert_eq!(echoed["authorization"], "Bearer tok123");
}

#[tokio::test]
async fn anonymous_request_carries_no_authorization_header() {
    let app = Router::new().route(
        "/api/classrooms",
        get(|headers: HeaderMap| async move {
            Json(json!({"has_authorization": headers.contains_key("authorization")}))
        }),
    );
    let harness = harness(app).await;

    let echoed =
        api::classrooms::list_classrooms(&harness.client, &api::ListParams::default())
            .await
            .expect("list succeeds");
    assert_eq!(echoed["has_authorization"], false);
}

// =============================================================================
// 401 eviction — session cleared, one redirect, error still raised.
// =============================================================================

fn unauthorized_router() -> Router {
    login_router().route(
        "/api/families",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"message": "Unauthenticated."}))) }),
    )
}

#[tokio::test]
async fn unauthorized_response_evicts_session_and_redirects_once() {
    let harness = harness(unauthorized_router()).await;
    api::auth::login(&harness.client, &credentials()).await.expect("login succeeds");

    let error = api::families::list_families(&harness.client, &api::ListParams::default())
        .await
        .expect_err("request must fail");
    assert!(error.is_unauthorized());

    assert_eq!(harness.storage.get_item("auth.token"), None);
    assert_eq!(harness.storage.get_item("auth.user"), None);
    assert_eq!(harness.navigator.recorded(), vec!["/login".to_owned()]);
}

#[tokio::test]
async fn concurrent_unauthorized_responses_redirect_exactly_once() {
    let harness = harness(unauthorized_router()).await;
    api::auth::login(&harness.client, &credentials()).await.expect("login succeeds");

    let params = api::ListParams::default();
    let (first, second) = tokio::join!(
        api::families::list_families(&harness.client, &params),
        api::families::list_families(&harness.client, &params),
    );
    assert!(first.is_err());
    assert!(second.is_err());

    assert_eq!(harness.storage.get_item("auth.token"), None);
    assert_eq!(harness.navigator.recorded(), vec!["/login".to_owned()]);
}

#[tokio::test]
async fn unauthorized_without_token_does_not_redirect() {
    let harness = harness(unauthorized_router()).await;

    let error = api::families::list_families(&harness.client, &api::ListParams::default())
        .await
        .expect_err("request must fail");
    assert!(error.is_unauthorized());
    assert!(harness.navigator.recorded().is_empty());
}

// =============================================================================
// Logout — local state always clears, success or failure server-side.
// =============================================================================

#[tokio::test]
async fn logout_clears_session_when_server_succeeds() {
    let app = login_router()
        .route("/api/logout", post(|| async { Json(json!({"message": "ok"})) }));
    let harness = harness(app).await;
    let auth = Auth::new(harness.client.clone());

    auth.login(&credentials()).await.expect("login succeeds");
    auth.logout().await;

    assert_eq!(harness.storage.get_item("auth.token"), None);
    assert_eq!(harness.storage.get_item("auth.user"), None);
    let state = auth.state();
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
    assert_eq!(state.error, None);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn logout_clears_session_even_when_server_fails() {
    let app = login_router().route(
        "/api/logout",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"}))) }),
    );
    let harness = harness(app).await;
    let auth = Auth::new(harness.client.clone());

    auth.login(&credentials()).await.expect("login succeeds");
    auth.logout().await;

    assert_eq!(harness.storage.get_item("auth.token"), None);
    assert_eq!(harness.storage.get_item("auth.user"), None);
    let state = auth.state();
    assert!(!state.is_authenticated);
    assert!(state.error.is_some(), "server failure is recorded, not raised");
    assert!(!state.is_loading);
}

// =============================================================================
// Response decoding edges.
// =============================================================================

#[tokio::test]
async fn empty_body_decodes_as_json_null() {
    let app = Router::new()
        .route("/api/cursus/{id}", delete(|| async { StatusCode::NO_CONTENT.into_response() }));
    let harness = harness(app).await;

    let value = api::cursus::delete_cursus(&harness.client, 7).await.expect("delete succeeds");
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn error_status_surfaces_code_and_message() {
    let app = Router::new().route(
        "/api/users",
        get(|| async { (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"message": "invalide"}))) }),
    );
    let harness = harness(app).await;

    let error = api::users::list_users(&harness.client, &api::ListParams::default())
        .await
        .expect_err("request must fail");
    match error {
        ApiError::Status { status, ref message, .. } => {
            assert_eq!(status, 422);
            assert_eq!(message.as_deref(), Some("invalide"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

// =============================================================================
// Multipart school mutations.
// =============================================================================

#[tokio::test]
async fn school_update_tunnels_method_and_uploads_logo() {
    let app = Router::new().route(
        "/api/schools/{id}",
        post(|mut multipart: Multipart| async move {
            let mut fields = Vec::new();
            while let Some(field) = multipart.next_field().await.expect("read field") {
                let name = field.name().unwrap_or_default().to_owned();
                let content = field.bytes().await.expect("field bytes");
                fields.push((name, content.len()));
            }
            Json(json!({"fields": fields}))
        }),
    );
    let harness = harness(app).await;

    let logo = api::schools::LogoUpload {
        filename: "logo.png".to_owned(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
        content_type: "image/png".to_owned(),
    };
    let echoed = api::schools::update_school(
        &harness.client,
        3,
        &json!({"name": "École Averroès", "city": "Lille"}),
        Some(&logo),
    )
    .await
    .expect("update succeeds");

    let names: Vec<String> = echoed["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .map(|entry| entry[0].as_str().unwrap_or_default().to_owned())
        .collect();
    assert!(names.contains(&"_method".to_owned()));
    assert!(names.contains(&"name".to_owned()));
    assert!(names.contains(&"logo".to_owned()));
}
