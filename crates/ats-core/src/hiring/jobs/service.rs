use std::sync::Arc;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use super::domain::{Job, JobDraft, JobId, JobStatus, JobUpdate};
use super::query::JobQuery;
use super::repository::JobRepository;
use crate::datasource::RepositoryError;
use crate::hiring::PageMeta;

/// Read/write operations over the job catalog, validated before they reach
/// the data source.
pub struct JobService {
    repository: Arc<dyn JobRepository>,
}

fn next_job_id() -> JobId {
    JobId(format!("job-{}", Uuid::new_v4()))
}

impl JobService {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        query: &JobQuery,
    ) -> Result<(Vec<Job>, Option<PageMeta>), JobServiceError> {
        Ok(self.repository.list(query).await?)
    }

    pub async fn get(&self, id: &JobId) -> Result<Job, JobServiceError> {
        self.repository
            .get(id)
            .await?
            .ok_or(JobServiceError::Repository(RepositoryError::NotFound))
    }

    pub async fn create(&self, draft: JobDraft) -> Result<Job, JobServiceError> {
        validate_draft(&draft)?;
        let job = Job::from_draft(next_job_id(), today(), draft);
        Ok(self.repository.insert(job).await?)
    }

    pub async fn update(&self, id: &JobId, update: JobUpdate) -> Result<Job, JobServiceError> {
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(JobServiceError::Validation("title must not be empty".into()));
            }
        }
        let mut job = self.get(id).await?;
        job.apply_update(update);
        Ok(self.repository.update(job).await?)
    }

    pub async fn set_status(&self, id: &JobId, status: JobStatus) -> Result<Job, JobServiceError> {
        Ok(self.repository.set_status(id, status).await?)
    }

    pub async fn delete(&self, id: &JobId) -> Result<(), JobServiceError> {
        Ok(self.repository.delete(id).await?)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn validate_draft(draft: &JobDraft) -> Result<(), JobServiceError> {
    if draft.title.trim().is_empty() {
        return Err(JobServiceError::Validation("title must not be empty".into()));
    }
    if draft.department.trim().is_empty() {
        return Err(JobServiceError::Validation(
            "department must not be empty".into(),
        ));
    }
    if draft.location.trim().is_empty() {
        return Err(JobServiceError::Validation(
            "location must not be empty".into(),
        ));
    }
    Ok(())
}

/// Error raised by the job service.
#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("invalid job payload: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
