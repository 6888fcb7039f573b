use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationSubmission, EvaluationDraft,
};
use super::lifecycle::forward_options;
use super::query::{ApplicationQuery, ApplicationSort};
use super::service::{ApplicationService, ApplicationServiceError};
use crate::datasource::RepositoryError;
use crate::hiring::jobs::domain::JobId;
use crate::hiring::{Envelope, PageRequest};

/// Router builder exposing intake, review, notes, and evaluation endpoints.
pub fn application_router(service: Arc<ApplicationService>) -> Router {
    Router::new()
        .route("/applications", get(list_handler).post(submit_handler))
        .route("/applications/:application_id", get(get_handler))
        .route("/applications/:application_id/status", patch(status_handler))
        .route("/applications/:application_id/notes", post(note_handler))
        .route(
            "/applications/:application_id/evaluation",
            post(evaluation_handler),
        )
        .with_state(service)
}

/// Wire shape of the listing query string.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApplicationListParams {
    search: Option<String>,
    job_id: Option<String>,
    status: Option<ApplicationStatus>,
    department: Option<String>,
    sort: Option<ApplicationSort>,
    page: Option<usize>,
    page_size: Option<usize>,
}

impl From<ApplicationListParams> for ApplicationQuery {
    fn from(params: ApplicationListParams) -> Self {
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
        ApplicationQuery {
            search: params.search,
            job_id: params.job_id.map(JobId),
            status: params.status,
            department: params.department,
            sort: params.sort.unwrap_or_default(),
            page,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusPatch {
    status: ApplicationStatus,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoteRequest {
    author: String,
    content: String,
}

/// Transition response: the updated record, the forward options the review
/// screen should offer next, and a non-blocking warning when the
/// notification could not be delivered.
#[derive(Debug, Serialize)]
pub(crate) struct TransitionResponse {
    data: Application,
    next_options: Vec<ApplicationStatus>,
    notified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

async fn list_handler(
    State(service): State<Arc<ApplicationService>>,
    Query(params): Query<ApplicationListParams>,
) -> Response {
    match service.list(&ApplicationQuery::from(params)).await {
        Ok((applications, meta)) => {
            (StatusCode::OK, axum::Json(Envelope::paged(applications, meta))).into_response()
        }
        Err(error) => error_response(error),
    }
}

async fn get_handler(
    State(service): State<Arc<ApplicationService>>,
    Path(application_id): Path<String>,
) -> Response {
    match service.get(&ApplicationId(application_id)).await {
        Ok(application) => {
            (StatusCode::OK, axum::Json(Envelope::bare(application))).into_response()
        }
        Err(error) => error_response(error),
    }
}

async fn submit_handler(
    State(service): State<Arc<ApplicationService>>,
    axum::Json(submission): axum::Json<ApplicationSubmission>,
) -> Response {
    match service.submit(submission).await {
        Ok(application) => {
            (StatusCode::CREATED, axum::Json(Envelope::bare(application))).into_response()
        }
        Err(error) => error_response(error),
    }
}

async fn status_handler(
    State(service): State<Arc<ApplicationService>>,
    Path(application_id): Path<String>,
    axum::Json(patch): axum::Json<StatusPatch>,
) -> Response {
    match service
        .transition(&ApplicationId(application_id), patch.status, patch.description)
        .await
    {
        Ok(outcome) => {
            let warning = (!outcome.notified)
                .then(|| "status updated but the notification could not be sent".to_string());
            let body = TransitionResponse {
                next_options: forward_options(outcome.application.status).to_vec(),
                data: outcome.application,
                notified: outcome.notified,
                warning,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

async fn note_handler(
    State(service): State<Arc<ApplicationService>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<NoteRequest>,
) -> Response {
    match service
        .add_note(&ApplicationId(application_id), request.author, request.content)
        .await
    {
        Ok(application) => {
            (StatusCode::CREATED, axum::Json(Envelope::bare(application))).into_response()
        }
        Err(error) => error_response(error),
    }
}

async fn evaluation_handler(
    State(service): State<Arc<ApplicationService>>,
    Path(application_id): Path<String>,
    axum::Json(draft): axum::Json<EvaluationDraft>,
) -> Response {
    match service
        .add_evaluation(&ApplicationId(application_id), draft)
        .await
    {
        Ok(application) => {
            (StatusCode::CREATED, axum::Json(Envelope::bare(application))).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ApplicationServiceError::Repository(RepositoryError::Unauthorized) => {
            StatusCode::UNAUTHORIZED
        }
        ApplicationServiceError::Repository(RepositoryError::Unsupported(_)) => {
            StatusCode::METHOD_NOT_ALLOWED
        }
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::BAD_GATEWAY
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
