use async_trait::async_trait;
use chrono::NaiveDate;

use super::domain::{Application, ApplicationId, ApplicationStatus, Evaluation, Note};
use super::query::ApplicationQuery;
use crate::datasource::RepositoryError;
use crate::hiring::PageMeta;

/// Storage abstraction for applications, so the service can be exercised
/// against the in-memory fixtures or a remote backend interchangeably.
///
/// The review writes (status, notes, evaluation) have defaults that rewrite
/// the whole record through [`update`](Self::update); the remote source
/// overrides them to hit the backend's dedicated sub-resource endpoints.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn list(
        &self,
        query: &ApplicationQuery,
    ) -> Result<(Vec<Application>, Option<PageMeta>), RepositoryError>;
    async fn get(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
    async fn insert(&self, application: Application) -> Result<Application, RepositoryError>;
    async fn update(&self, application: Application) -> Result<Application, RepositoryError>;

    /// Commits a status transition: one appended timeline entry, status set.
    async fn set_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
        date: NaiveDate,
        description: String,
    ) -> Result<Application, RepositoryError> {
        let mut application = self.get(id).await?.ok_or(RepositoryError::NotFound)?;
        application.apply_transition(status, date, description);
        self.update(application).await
    }

    async fn add_note(
        &self,
        id: &ApplicationId,
        note: Note,
    ) -> Result<Application, RepositoryError> {
        let mut application = self.get(id).await?.ok_or(RepositoryError::NotFound)?;
        application.notes.push(note);
        self.update(application).await
    }

    /// Stores the evaluation, replacing any previous one.
    async fn set_evaluation(
        &self,
        id: &ApplicationId,
        evaluation: Evaluation,
    ) -> Result<Application, RepositoryError> {
        let mut application = self.get(id).await?.ok_or(RepositoryError::NotFound)?;
        application.evaluation = Some(evaluation);
        self.update(application).await
    }
}
