//! Tests for the surrounding HTTP surface: rooms listing, welcome payload,
//! health probes, and the trace identifier middleware.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::Value;

use yadoya_backend::server::build_app;

use support::Harness;

async fn spawn(
    harness: &Harness,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    actix_test::init_service(build_app(
        harness.http_state.clone(),
        harness.health_state.clone(),
    ))
    .await
}

async fn get(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
) -> actix_web::dev::ServiceResponse {
    actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).to_request()).await
}

#[actix_web::test]
async fn listing_rooms_preserves_insertion_order() {
    let harness = Harness::new();
    harness.seed_room("Standard Room", 10_000, "standard.jpg").await;
    harness.seed_room("Deluxe Room", 18_000, "deluxe.jpg").await;
    harness.seed_room("Suite", 32_000, "suite.jpg").await;
    let app = spawn(&harness).await;

    let res = get(&app, "/api/rooms").await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|room| room["name"].as_str().expect("name string"))
        .collect();
    assert_eq!(names, ["Standard Room", "Deluxe Room", "Suite"]);
}

#[actix_web::test]
async fn an_empty_store_lists_no_rooms() {
    let harness = Harness::new();
    let app = spawn(&harness).await;

    let res = get(&app, "/api/rooms").await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, Value::Array(Vec::new()));
}

#[actix_web::test]
async fn the_root_serves_the_welcome_payload() {
    let harness = Harness::new();
    let app = spawn(&harness).await;

    let res = get(&app, "/").await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["service"], "yadoya-backend");
}

#[actix_web::test]
async fn readiness_follows_the_health_state() {
    let harness = Harness::new();
    let app = spawn(&harness).await;

    let res = get(&app, "/health/ready").await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    harness.health_state.mark_ready();
    let res = get(&app, "/health/ready").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn liveness_starts_healthy() {
    let harness = Harness::new();
    let app = spawn(&harness).await;

    let res = get(&app, "/health/live").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn every_response_carries_a_trace_identifier() {
    let harness = Harness::new();
    let app = spawn(&harness).await;

    let res = get(&app, "/api/rooms").await;

    let header = res
        .headers()
        .get("trace-id")
        .expect("trace-id header present");
    let value = header.to_str().expect("header is valid UTF-8");
    assert!(
        uuid::Uuid::parse_str(value).is_ok(),
        "trace identifier is a UUID: {value}"
    );
}
