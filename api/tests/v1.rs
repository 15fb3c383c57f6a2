use std::sync::Arc;

use adapter::store::{snapshot::MemorySnapshotStore, SharedStore};
use api::route::v1;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use registry::AppRegistry;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> anyhow::Result<Router> {
    let store = SharedStore::load(Arc::new(MemorySnapshotStore::default()))?;
    Ok(Router::new()
        .merge(v1::routes())
        .with_state(AppRegistry::new(store)))
}

fn post_json(uri: &str, body: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?)
}

async fn response_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn health_check_works() -> anyhow::Result<()> {
    let app = test_app()?;
    let response = app
        .oneshot(Request::builder().uri("/api/v1/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn catalog_and_schedule_are_served() -> anyhow::Result<()> {
    let app = test_app()?;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/v1/spaces").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await?;
    assert_eq!(body["items"].as_array().unwrap().len(), 6);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/slots").body(Body::empty())?)
        .await?;
    let body = response_json(response).await?;
    let slots = body["items"].as_array().unwrap();
    assert_eq!(slots.len(), 14);
    assert_eq!(slots[0], "09:00");
    Ok(())
}

#[tokio::test]
async fn booking_twice_conflicts_and_leaves_the_ledger_unchanged() -> anyhow::Result<()> {
    let app = test_app()?;
    let body = json!({"spaceId": "3", "date": "2024-07-04", "startTime": "15:00"});

    let response = app
        .clone()
        .oneshot(post_json("/api/v1/reservations", body.clone())?)
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await?;
    assert_eq!(created["status"], "confirmed");
    assert_eq!(created["spaceName"], "Quincho");
    assert_eq!(created["userName"], "María García");

    // Identical triple as the admin: the booking engine must refuse.
    let mut request = post_json("/api/v1/reservations", body)?;
    request
        .headers_mut()
        .insert("x-profile-id", "admin-1".parse()?);
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/reservations")
                .body(Body::empty())?,
        )
        .await?;
    let ledger = response_json(response).await?;
    assert_eq!(ledger["items"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn availability_reflects_bookings_and_cancellations() -> anyhow::Result<()> {
    let app = test_app()?;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            json!({"spaceId": "2", "date": "2024-06-10", "startTime": "18:00"}),
        )?)
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await?;
    let reservation_id = created["id"].as_str().unwrap().to_string();

    let availability_uri = "/api/v1/spaces/2/availability?date=2024-06-10";
    let response = app
        .clone()
        .oneshot(Request::builder().uri(availability_uri).body(Body::empty())?)
        .await?;
    let body = response_json(response).await?;
    let taken: Vec<&Value> = body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|slot| slot["taken"] == true)
        .collect();
    assert_eq!(taken.len(), 1);
    assert_eq!(taken[0]["time"], "18:00");

    // Cancel twice: both answer OK, and the slot frees up once.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/v1/reservations/{reservation_id}/cancel"))
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(Request::builder().uri(availability_uri).body(Body::empty())?)
        .await?;
    let body = response_json(response).await?;
    assert!(body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .all(|slot| slot["taken"] == false));
    Ok(())
}

#[tokio::test]
async fn my_reservations_follow_the_acting_profile() -> anyhow::Result<()> {
    let app = test_app()?;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            json!({"spaceId": "5", "date": "2024-06-11", "startTime": "09:00"}),
        )?)
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Default identity is the seeded resident.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/reservations/me")
                .body(Body::empty())?,
        )
        .await?;
    let body = response_json(response).await?;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    // The admin has none.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/reservations/me")
                .header("x-profile-id", "admin-1")
                .body(Body::empty())?,
        )
        .await?;
    let body = response_json(response).await?;
    assert!(body["items"].as_array().unwrap().is_empty());

    // An unknown identity is rejected.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/reservations/me")
                .header("x-profile-id", "ghost")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn roster_import_reports_both_counts() -> anyhow::Result<()> {
    let app = test_app()?;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/residents/import",
            json!({"data": "Juan Perez, juan@email.com, 10A\nAna López, ana@email.com"}),
        )?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await?;
    assert_eq!(body["importedCount"], 1);
    assert_eq!(body["skippedCount"], 1);
    assert_eq!(body["items"][0]["role"], "resident");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/residents")
                .body(Body::empty())?,
        )
        .await?;
    let body = response_json(response).await?;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn incomplete_selections_are_rejected() -> anyhow::Result<()> {
    let app = test_app()?;

    // Empty selection values fail validation.
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            json!({"spaceId": "", "date": "2024-06-01", "startTime": ""}),
        )?)
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A time that is not on the schedule is unprocessable.
    let response = app
        .oneshot(post_json(
            "/api/v1/reservations",
            json!({"spaceId": "1", "date": "2024-06-01", "startTime": "10:30"}),
        )?)
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}
