use std::collections::HashMap;
use std::net::SocketAddr;

use api::EndpointConfig;
use api::HttpReferralSource;
use api::ReferralError;
use api::ReferralSource;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde_json::json;
use serde_json::Value;
use tokio::net::TcpListener;

/// Starts `app` on an ephemeral local port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn source_for(base_url: &str) -> HttpReferralSource {
    HttpReferralSource::new(EndpointConfig::new(base_url).unwrap())
}

async fn echo_user(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let user = params.get("userId").cloned().unwrap_or_default();
    Json(json!({
        "referrals": [
            {"firstName": "Ann", "lastName": "Lee", "email": "a@x.com", "date": "2024-01-05", "rewards": 12.5},
            {"firstName": user, "lastName": "Echo", "email": "e@x.com", "date": "2024-02-01", "rewards": 3}
        ]
    }))
}

#[tokio::test]
async fn fetches_referrals_for_user() {
    let base = serve(Router::new().route("/api/referrals", get(echo_user))).await;

    let referrals = source_for(&base).referrals("u1").await.unwrap();

    assert_eq!(referrals.len(), 2);
    assert_eq!(referrals[0].display_name(), "Ann Lee");
    assert_eq!(referrals[0].date.format_short(), "Jan 5, 2024");
    assert_eq!(referrals[0].rewards.to_string_with_code(), "12.50 $RWA");
    assert_eq!(referrals[1].display_name(), "u1 Echo");
}

#[tokio::test]
async fn user_id_is_url_encoded() {
    let base = serve(Router::new().route("/api/referrals", get(echo_user))).await;

    let referrals = source_for(&base).referrals("a b&c=d").await.unwrap();

    assert_eq!(referrals[1].first_name, "a b&c=d");
}

#[tokio::test]
async fn null_list_is_empty() {
    let app = Router::new().route(
        "/api/referrals",
        get(|| async { Json(json!({ "referrals": null })) }),
    );
    let base = serve(app).await;

    let referrals = source_for(&base).referrals("u1").await.unwrap();

    assert!(referrals.is_empty());
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let app = Router::new().route(
        "/api/referrals",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;

    let err = source_for(&base).referrals("u1").await.unwrap_err();

    assert!(
        matches!(err, ReferralError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        "{err}"
    );
}

#[tokio::test]
async fn missing_route_is_reported_as_status() {
    let base = serve(Router::new()).await;

    let err = source_for(&base).referrals("u1").await.unwrap_err();

    assert!(matches!(err, ReferralError::Status(StatusCode::NOT_FOUND)), "{err}");
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let app = Router::new().route("/api/referrals", get(|| async { "not json" }));
    let base = serve(app).await;

    let err = source_for(&base).referrals("u1").await.unwrap_err();

    assert!(matches!(err, ReferralError::Decode(_)), "{err}");
}

#[tokio::test]
async fn refused_connection_is_reported() {
    // bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source_for(&format!("http://{addr}"))
        .referrals("u1")
        .await
        .unwrap_err();

    assert!(matches!(err, ReferralError::Request(_)), "{err}");
}
