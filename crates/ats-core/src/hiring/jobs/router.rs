use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ExperienceLevel, JobDraft, JobId, JobStatus, JobUpdate};
use super::query::{JobQuery, JobSort};
use super::service::{JobService, JobServiceError};
use crate::datasource::RepositoryError;
use crate::hiring::{Envelope, PageRequest};

/// Router builder exposing the job catalog endpoints.
pub fn job_router(service: Arc<JobService>) -> Router {
    Router::new()
        .route("/jobs", get(list_handler).post(create_handler))
        .route(
            "/jobs/:job_id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/jobs/:job_id/status", patch(status_handler))
        .with_state(service)
}

/// Wire shape of the listing query string.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct JobListParams {
    search: Option<String>,
    department: Option<String>,
    location: Option<String>,
    experience_level: Option<ExperienceLevel>,
    status: Option<JobStatus>,
    sort: Option<JobSort>,
    page: Option<usize>,
    page_size: Option<usize>,
}

impl From<JobListParams> for JobQuery {
    fn from(params: JobListParams) -> Self {
        let page = match (params.page, params.page_size) {
            (Some(page), size) => Some(PageRequest {
                page,
                page_size: size.unwrap_or(20),
            }),
            (None, Some(size)) => Some(PageRequest {
                page: 1,
                page_size: size,
            }),
            (None, None) => None,
        };
        JobQuery {
            search: params.search,
            department: params.department,
            location: params.location,
            experience_level: params.experience_level,
            status: params.status,
            sort: params.sort.unwrap_or_default(),
            page,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobStatusPatch {
    status: JobStatus,
}

async fn list_handler(
    State(service): State<Arc<JobService>>,
    Query(params): Query<JobListParams>,
) -> Response {
    match service.list(&JobQuery::from(params)).await {
        Ok((jobs, meta)) => (StatusCode::OK, axum::Json(Envelope::paged(jobs, meta))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn get_handler(
    State(service): State<Arc<JobService>>,
    Path(job_id): Path<String>,
) -> Response {
    match service.get(&JobId(job_id)).await {
        Ok(job) => (StatusCode::OK, axum::Json(Envelope::bare(job))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn create_handler(
    State(service): State<Arc<JobService>>,
    axum::Json(draft): axum::Json<JobDraft>,
) -> Response {
    match service.create(draft).await {
        Ok(job) => (StatusCode::CREATED, axum::Json(Envelope::bare(job))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn update_handler(
    State(service): State<Arc<JobService>>,
    Path(job_id): Path<String>,
    axum::Json(update): axum::Json<JobUpdate>,
) -> Response {
    match service.update(&JobId(job_id), update).await {
        Ok(job) => (StatusCode::OK, axum::Json(Envelope::bare(job))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn status_handler(
    State(service): State<Arc<JobService>>,
    Path(job_id): Path<String>,
    axum::Json(patch): axum::Json<JobStatusPatch>,
) -> Response {
    match service.set_status(&JobId(job_id), patch.status).await {
        Ok(job) => (StatusCode::OK, axum::Json(Envelope::bare(job))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn delete_handler(
    State(service): State<Arc<JobService>>,
    Path(job_id): Path<String>,
) -> Response {
    match service.delete(&JobId(job_id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: JobServiceError) -> Response {
    let status = match &error {
        JobServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        JobServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        JobServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        JobServiceError::Repository(RepositoryError::Unauthorized) => StatusCode::UNAUTHORIZED,
        JobServiceError::Repository(RepositoryError::Unsupported(_)) => {
            StatusCode::METHOD_NOT_ALLOWED
        }
        JobServiceError::Repository(RepositoryError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
