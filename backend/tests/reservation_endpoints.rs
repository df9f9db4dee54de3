//! End-to-end reservation workflow tests over the full application wiring.
//!
//! Each test runs the production routing from `server::build_app` against a
//! file-backed store in a temporary directory, then inspects the store file
//! directly to confirm what was (or was not) written.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::Value;
use std::sync::atomic::Ordering;

use yadoya_backend::server::build_app;

use support::{Harness, count_documents, delete_room, reservation_payload};

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

async fn post_reservation(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    payload: Value,
) -> actix_web::dev::ServiceResponse {
    actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(payload)
            .to_request(),
    )
    .await
}

async fn get_reservation(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    id: &str,
) -> actix_web::dev::ServiceResponse {
    actix_test::call_service(
        app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/reservations/{id}"))
            .to_request(),
    )
    .await
}

#[actix_web::test]
async fn booking_creates_a_confirmed_reservation_and_sends_one_confirmation() {
    let harness = Harness::new();
    let room = harness.seed_room("Standard Room", 10_000, "standard.jpg").await;
    let app = spawn(&harness).await;

    let res = post_reservation(&app, reservation_payload(&room.id.to_string())).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["name"], "Taro Yamada");
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["userId"], "guest");
    assert_eq!(body["nights"], 2);
    assert_eq!(body["guests"], 2);
    assert_eq!(body["roomDetails"]["price"], 10_000);
    assert_eq!(body["roomDetails"]["name"], "Standard Room");

    assert_eq!(count_documents(&harness.store_path, "reservations"), 1);
    assert_eq!(harness.sent.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn rejected_payloads_write_nothing_and_send_nothing() {
    let harness = Harness::new();
    let room = harness.seed_room("Standard Room", 10_000, "standard.jpg").await;
    let app = spawn(&harness).await;

    let mut payload = reservation_payload(&room.id.to_string());
    payload["checkOut"] = "2025-04-30".into();

    let res = post_reservation(&app, payload).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    let errors = body["details"]["errors"]
        .as_array()
        .expect("descriptor array");
    assert!(
        errors
            .iter()
            .any(|e| e["field"] == "checkOut"
                && e["message"] == "checkOut must be later than checkIn"),
        "stay order violation reported: {errors:?}"
    );

    assert_eq!(count_documents(&harness.store_path, "reservations"), 0);
    assert_eq!(harness.sent.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn identical_submissions_create_distinct_reservations() {
    let harness = Harness::new();
    let room = harness.seed_room("Standard Room", 10_000, "standard.jpg").await;
    let app = spawn(&harness).await;

    let first = post_reservation(&app, reservation_payload(&room.id.to_string())).await;
    let second = post_reservation(&app, reservation_payload(&room.id.to_string())).await;

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CREATED);
    let first: Value = actix_test::read_body_json(first).await;
    let second: Value = actix_test::read_body_json(second).await;
    assert_ne!(first["id"], second["id"]);
    assert_eq!(count_documents(&harness.store_path, "reservations"), 2);
}

#[actix_web::test]
async fn retrieval_substitutes_the_current_room_record() {
    let harness = Harness::new();
    let room = harness.seed_room("Standard Room", 10_000, "standard.jpg").await;
    let app = spawn(&harness).await;

    let created = post_reservation(&app, reservation_payload(&room.id.to_string())).await;
    let created: Value = actix_test::read_body_json(created).await;
    let id = created["id"].as_str().expect("identifier string");

    let res = get_reservation(&app, id).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["id"].as_str(), Some(id));
    // The read-time join carries the full room record, identifier included,
    // unlike the creation-time snapshot.
    assert_eq!(body["roomDetails"]["id"], room.id.to_string());
    assert_eq!(body["roomDetails"]["price"], 10_000);
}

#[actix_web::test]
async fn deleting_the_room_breaks_retrieval_of_its_reservations() {
    let harness = Harness::new();
    let room = harness.seed_room("Standard Room", 10_000, "standard.jpg").await;
    let app = spawn(&harness).await;

    let created = post_reservation(&app, reservation_payload(&room.id.to_string())).await;
    let created: Value = actix_test::read_body_json(created).await;
    let id = created["id"].as_str().expect("identifier string");

    delete_room(&harness.store_path, &room.id.to_string());

    let res = get_reservation(&app, id).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn malformed_identifiers_read_as_not_found() {
    let harness = Harness::new();
    let app = spawn(&harness).await;

    let res = get_reservation(&app, "not-a-uuid").await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn mail_transport_failure_never_blocks_the_booking() {
    let harness = Harness::with_failing_mailer();
    let room = harness.seed_room("Standard Room", 10_000, "standard.jpg").await;
    let app = spawn(&harness).await;

    let res = post_reservation(&app, reservation_payload(&room.id.to_string())).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(harness.sent.load(Ordering::SeqCst), 1);
    assert_eq!(count_documents(&harness.store_path, "reservations"), 1);
}

#[actix_web::test]
async fn unknown_rooms_are_reported_as_reference_failures() {
    let harness = Harness::new();
    let app = spawn(&harness).await;

    let res = post_reservation(
        &app,
        reservation_payload("00000000-0000-0000-0000-000000000000"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["errors"][0]["field"], "roomId");
    assert_eq!(count_documents(&harness.store_path, "reservations"), 0);
}
