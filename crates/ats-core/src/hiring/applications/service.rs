use std::sync::Arc;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationSubmission, Evaluation,
    EvaluationDraft, JobSnapshot, Note,
};
use super::lifecycle;
use super::query::ApplicationQuery;
use super::repository::ApplicationRepository;
use crate::datasource::RepositoryError;
use crate::hiring::jobs::repository::JobRepository;
use crate::hiring::PageMeta;
use crate::notify::Notifier;

/// Service composing the application store, the job catalog (for snapshot
/// denormalization at intake), and best-effort notification dispatch.
pub struct ApplicationService {
    repository: Arc<dyn ApplicationRepository>,
    jobs: Arc<dyn JobRepository>,
    notifier: Arc<Notifier>,
}

fn next_application_id() -> ApplicationId {
    ApplicationId(format!("app-{}", Uuid::new_v4()))
}

fn next_note_id() -> String {
    format!("note-{}", Uuid::new_v4())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Result of a status transition. The state change is authoritative; e-mail
/// is best-effort, so a failed dispatch surfaces only as `notified = false`.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    pub application: Application,
    pub notified: bool,
}

impl ApplicationService {
    pub fn new(
        repository: Arc<dyn ApplicationRepository>,
        jobs: Arc<dyn JobRepository>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            repository,
            jobs,
            notifier,
        }
    }

    /// Submit a new application: snapshot the opening, build the record with
    /// a fresh identifier, persist it, then send the candidate confirmation
    /// (best-effort).
    pub async fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<Application, ApplicationServiceError> {
        validate_submission(&submission)?;

        let job = self
            .jobs
            .get(&submission.job_id)
            .await?
            .ok_or_else(|| {
                ApplicationServiceError::Validation(format!(
                    "unknown job '{}'",
                    submission.job_id.0
                ))
            })?;

        let snapshot = JobSnapshot {
            job_id: job.id.clone(),
            title: job.title.clone(),
            department: job.department.clone(),
        };

        let application =
            Application::submitted(next_application_id(), snapshot, submission, today());
        let stored = self.repository.insert(application).await?;

        self.notifier.application_submitted(&stored).await;
        Ok(stored)
    }

    pub async fn list(
        &self,
        query: &ApplicationQuery,
    ) -> Result<(Vec<Application>, Option<PageMeta>), ApplicationServiceError> {
        Ok(self.repository.list(query).await?)
    }

    pub async fn get(&self, id: &ApplicationId) -> Result<Application, ApplicationServiceError> {
        self.repository
            .get(id)
            .await?
            .ok_or(ApplicationServiceError::Repository(
                RepositoryError::NotFound,
            ))
    }

    /// Advance the lifecycle. The transition is committed before the
    /// notification goes out, and a dispatch failure never rolls it back.
    pub async fn transition(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
        description: Option<String>,
    ) -> Result<TransitionOutcome, ApplicationServiceError> {
        let description =
            description.unwrap_or_else(|| lifecycle::default_description(status).to_string());
        let application = self
            .repository
            .set_status(id, status, today(), description)
            .await?;

        let notified = self.notifier.status_changed(&application).await;
        Ok(TransitionOutcome {
            application,
            notified,
        })
    }

    pub async fn add_note(
        &self,
        id: &ApplicationId,
        author: String,
        content: String,
    ) -> Result<Application, ApplicationServiceError> {
        if content.trim().is_empty() {
            return Err(ApplicationServiceError::Validation(
                "note content must not be empty".into(),
            ));
        }
        let note = Note {
            id: next_note_id(),
            author,
            content,
            created_on: today(),
        };
        Ok(self.repository.add_note(id, note).await?)
    }

    /// Store a hiring-manager evaluation. The overall score is the mean of
    /// the provided criterion scores, rounded to two decimals. A second
    /// submission silently overwrites the first.
    pub async fn add_evaluation(
        &self,
        id: &ApplicationId,
        draft: EvaluationDraft,
    ) -> Result<Application, ApplicationServiceError> {
        draft
            .scores
            .validate()
            .map_err(ApplicationServiceError::Validation)?;
        if draft.evaluator.trim().is_empty() {
            return Err(ApplicationServiceError::Validation(
                "evaluator name must not be empty".into(),
            ));
        }

        let overall_score = draft.scores.mean();
        let evaluation = Evaluation {
            evaluator: draft.evaluator,
            scores: draft.scores,
            overall_score,
            comments: draft.comments,
            recommendation: draft.recommendation,
            evaluated_on: today(),
        };
        Ok(self.repository.set_evaluation(id, evaluation).await?)
    }
}

fn validate_submission(submission: &ApplicationSubmission) -> Result<(), ApplicationServiceError> {
    if submission.candidate.name.trim().is_empty() {
        return Err(ApplicationServiceError::Validation(
            "candidate name must not be empty".into(),
        ));
    }
    if !submission.candidate.email.contains('@') {
        return Err(ApplicationServiceError::Validation(format!(
            "'{}' is not a valid email address",
            submission.candidate.email
        )));
    }
    if submission.resume.trim().is_empty() {
        return Err(ApplicationServiceError::Validation(
            "resume reference must not be empty".into(),
        ));
    }
    if let Some(score) = submission.pre_screening_score {
        if score > 100 {
            return Err(ApplicationServiceError::Validation(format!(
                "pre-screening score must be 0-100, got {score}"
            )));
        }
    }
    Ok(())
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("invalid application payload: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
