//! HTTP-level specifications for the job catalog: listing filters, creation,
//! status changes, and mock-only deletion.

use std::sync::Arc;

use ats_core::datasource::memory::InMemoryJobRepository;
use ats_core::hiring::jobs::{job_router, JobService};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

fn router() -> axum::Router {
    job_router(Arc::new(JobService::new(Arc::new(
        InMemoryJobRepository::seeded(),
    ))))
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn list_combines_status_and_location_filters() {
    let response = router()
        .oneshot(
            Request::get("/jobs?status=active&location=bangkok")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await;
    let jobs = payload["data"].as_array().expect("data array");
    assert!(!jobs.is_empty());
    for job in jobs {
        assert_eq!(job["status"], "active");
        assert!(job["location"]
            .as_str()
            .expect("location string")
            .to_lowercase()
            .contains("bangkok"));
    }
}

#[tokio::test]
async fn list_pagination_echoes_totals() {
    let response = router()
        .oneshot(
            Request::get("/jobs?page=1&page_size=2")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = json_body(response).await;

    assert_eq!(payload["data"].as_array().expect("data array").len(), 2);
    assert_eq!(payload["meta"]["page"], 1);
    assert!(payload["meta"]["total"].as_u64().expect("total") >= 2);
}

#[tokio::test]
async fn create_then_fetch_round_trips() {
    let router = router();

    let response = router
        .clone()
        .oneshot(
            Request::post("/jobs")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "title": "Warehouse Supervisor",
                        "department": "Operations",
                        "location": "Bangkok",
                        "experience_level": "mid",
                        "description": "Run the night shift at the central warehouse.",
                        "requirements": ["Forklift certification"],
                        "status": "active"
                    })
                    .to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = json_body(response).await;
    let id = payload["data"]["id"].as_str().expect("id present");

    let response = router
        .oneshot(
            Request::get(format!("/jobs/{id}"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["data"]["title"], "Warehouse Supervisor");
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let response = router()
        .oneshot(
            Request::post("/jobs")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "title": "  ",
                        "department": "Operations",
                        "location": "Bangkok",
                        "experience_level": "mid",
                        "description": "x"
                    })
                    .to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn status_patch_closes_an_opening() {
    let response = router()
        .oneshot(
            Request::patch("/jobs/job-1/status")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "status": "closed" }).to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["data"]["status"], "closed");
}

#[tokio::test]
async fn delete_removes_from_the_mock_catalog() {
    let router = router();
    let response = router
        .clone()
        .oneshot(
            Request::delete("/jobs/job-6")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(
            Request::get("/jobs/job-6")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
