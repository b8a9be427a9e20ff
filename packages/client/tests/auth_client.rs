//! Interceptor-policy tests against loopback HTTP servers.

use std::sync::Arc;

use axum::extract::Path;
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use client::{join_independent, ApiError, AuthClient};
use session::{MemoryStore, PanelConfig, SessionManager, User};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn config_for(base_url: &str) -> PanelConfig {
    let mut config = PanelConfig::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_secs = 5;
    config
}

fn signed_in_sessions(token: &str) -> SessionManager {
    let sessions = SessionManager::new(Arc::new(MemoryStore::new()));
    assert!(sessions.save_user_data(&User::new("x@y.com", "HR"), token));
    sessions
}

#[tokio::test]
async fn requests_carry_the_bearer_token() {
    // the route only answers when the exact header built at construction
    // time comes through
    let app = Router::new().route(
        "/api/users/me",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("");
            if auth == "Bearer abc" {
                Ok(Json(json!({"user": {"email": "x@y.com", "role": "HR"}})))
            } else {
                Err(StatusCode::BAD_REQUEST)
            }
        }),
    );
    let base = serve(app).await;

    let sessions = signed_in_sessions("abc");
    let client = AuthClient::new(&config_for(&base), sessions).unwrap();
    let user = client.me().await.unwrap();
    assert_eq!(user.email, "x@y.com");
}

#[tokio::test]
async fn a_403_clears_the_persisted_session() {
    let app = Router::new().route(
        "/api/users/me",
        get(|| async { StatusCode::FORBIDDEN }),
    );
    let base = serve(app).await;

    let sessions = signed_in_sessions("abc");
    let client = AuthClient::new(&config_for(&base), sessions.clone()).unwrap();

    let err = client.me().await.unwrap_err();
    assert!(err.is_auth_rejection());
    assert!(sessions.current_user().is_none());
    assert!(sessions.token().is_none());
}

#[tokio::test]
async fn a_401_clears_the_persisted_session() {
    let app = Router::new().route(
        "/api/users/validate-token",
        get(|| async { StatusCode::UNAUTHORIZED }),
    );
    let base = serve(app).await;

    let sessions = signed_in_sessions("stale");
    let client = AuthClient::new(&config_for(&base), sessions.clone()).unwrap();

    match client.validate_token().await {
        Err(ApiError::AuthRejected(status)) => assert_eq!(status, StatusCode::UNAUTHORIZED),
        other => panic!("expected auth rejection, got {other:?}"),
    }
    assert!(sessions.current_user().is_none());
}

#[tokio::test]
async fn a_network_error_does_not_clear_the_session() {
    // reserve a port, then close it so the connection is refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let sessions = signed_in_sessions("abc");
    let client = AuthClient::new(&config_for(&base), sessions.clone()).unwrap();

    assert!(matches!(client.me().await, Err(ApiError::Network(_))));
    let user = sessions.current_user().unwrap();
    assert_eq!(user.email, "x@y.com");
    assert_eq!(sessions.token().as_deref(), Some("abc"));
}

#[tokio::test]
async fn other_error_statuses_pass_through_unchanged() {
    let app = Router::new().route(
        "/api/jobs",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(app).await;

    let sessions = signed_in_sessions("abc");
    let client = AuthClient::new(&config_for(&base), sessions.clone()).unwrap();

    match client.jobs().await {
        Err(ApiError::Status(status)) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected passthrough status error, got {other:?}"),
    }
    // a server-side failure is not an auth rejection: session kept
    assert!(sessions.current_user().is_some());
}

#[tokio::test]
async fn sign_in_round_trips_token_and_user() {
    let app = Router::new().route(
        "/api/users/signin",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "token": "fresh-token",
                "user": {"_id": "64b1", "email": body["email"], "role": "HR"}
            }))
        }),
    );
    let base = serve(app).await;

    let sessions = SessionManager::new(Arc::new(MemoryStore::new()));
    let client = AuthClient::new(&config_for(&base), sessions.clone()).unwrap();

    let signed_in = client.sign_in("x@y.com", "secret").await.unwrap();
    assert_eq!(signed_in.token, "fresh-token");
    assert_eq!(signed_in.user.role, "HR");

    assert!(sessions.save_user_data(&signed_in.user, &signed_in.token));
    assert_eq!(sessions.current_user(), Some(signed_in.user));
}

#[tokio::test]
async fn fan_out_failures_stay_independent() {
    let app = Router::new().route(
        "/api/applications/job/{job_id}",
        get(|Path(job_id): Path<String>| async move {
            if job_id == "broken" {
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            } else {
                Ok(Json(json!([
                    {"_id": "a1", "coverLetter": "hi", "status": "Pending"},
                    {"_id": "a2", "coverLetter": "hello", "status": "Accepted"}
                ])))
            }
        }),
    );
    let base = serve(app).await;

    let sessions = signed_in_sessions("abc");
    let client = AuthClient::new(&config_for(&base), sessions).unwrap();

    let job_ids = ["j1", "broken", "j2"];
    let results = join_independent(
        job_ids
            .iter()
            .map(|job_id| client.applications_for_job(job_id)),
    )
    .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().len(), 2);
    match &results[1] {
        Err(ApiError::Status(status)) => assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(results[2].as_ref().unwrap()[1].status, "Accepted");
}

#[tokio::test]
async fn fetch_profile_validates_a_handoff_token_without_touching_the_store() {
    let app = Router::new().route(
        "/api/users/me",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("");
            if auth == "Bearer url-token" {
                Ok(Json(json!({"user": {"email": "new@y.com", "role": "candidate"}})))
            } else {
                Err(StatusCode::UNAUTHORIZED)
            }
        }),
    );
    let base = serve(app).await;
    let config = config_for(&base);

    let user = client::users::fetch_profile(&config, "url-token").await.unwrap();
    assert_eq!(user.email, "new@y.com");

    // a rejected handoff token must not clear an existing session
    let sessions = signed_in_sessions("abc");
    assert!(client::users::fetch_profile(&config, "bogus").await.is_err());
    assert!(sessions.current_user().is_some());
}
