use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use super::common::*;
use crate::hiring::applications::domain::ApplicationStatus;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn submit_route_returns_created_with_an_envelope() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let payload = serde_json::to_value(submission("job-1")).expect("serializable");
    let response = router
        .oneshot(json_request("POST", "/applications", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["data"]["status"], "submitted");
    assert!(body["data"]["id"].as_str().is_some());
}

#[tokio::test]
async fn submit_route_rejects_unknown_jobs_as_unprocessable() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let payload = serde_json::to_value(submission("job-unknown")).expect("serializable");
    let response = router
        .oneshot(json_request("POST", "/applications", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_route_returns_not_found_for_missing_records() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/applications/app-missing")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_route_applies_the_status_filter() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/applications?status=interview")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let records = body["data"].as_array().expect("data array");
    assert!(records.iter().all(|r| r["status"] == "interview"));
}

#[tokio::test]
async fn status_route_reports_next_options_and_notification_outcome() {
    let (service, _, _) = build_service();
    let application = service
        .submit(submission("job-1"))
        .await
        .expect("submission succeeds");
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "PATCH",
            &format!("/applications/{}/status", application.id.0),
            serde_json::json!({ "status": "screening" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["data"]["status"], "screening");
    assert_eq!(body["notified"], true);
    assert!(body.get("warning").is_none());
    let options = body["next_options"].as_array().expect("options array");
    assert_eq!(options.len(), 2);
    assert!(options.contains(&serde_json::json!("interview")));
    assert!(options.contains(&serde_json::json!("rejected")));
}

#[tokio::test]
async fn status_route_warns_but_succeeds_when_dispatch_fails() {
    let service = build_service_with_failing_mailer();
    let application = service
        .submit(submission("job-1"))
        .await
        .expect("submission succeeds");
    let router = router_with_service(service.clone());

    let response = router
        .oneshot(json_request(
            "PATCH",
            &format!("/applications/{}/status", application.id.0),
            serde_json::json!({ "status": "offer" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["data"]["status"], "offer");
    assert_eq!(body["notified"], false);
    assert!(body["warning"].as_str().is_some());

    let stored = service.get(&application.id).await.expect("record present");
    assert_eq!(stored.status, ApplicationStatus::Offer);
}

#[tokio::test]
async fn note_and_evaluation_routes_return_created() {
    let (service, _, _) = build_service();
    let application = service
        .submit(submission("job-1"))
        .await
        .expect("submission succeeds");

    let router = router_with_service(service.clone());
    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/applications/{}/notes", application.id.0),
            serde_json::json!({ "author": "HR", "content": "Called the references" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let router = router_with_service(service);
    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/applications/{}/evaluation", application.id.0),
            serde_json::json!({
                "evaluator": "Hiring Manager",
                "scores": {
                    "technical": 4,
                    "communication": 5,
                    "problem_solving": 4,
                    "culture_fit": 5
                },
                "comments": "Great fit",
                "recommendation": "recommend"
            }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert!((body["data"]["evaluation"]["overall_score"].as_f64().expect("score") - 4.5).abs() < 0.005);
}
