//! REST-backed data source. One shared backend handle implements every
//! repository trait; all requests carry the bearer credential, and a 401
//! from the backend clears it so the next call fails fast as unauthorized
//! instead of hammering the API.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::RepositoryError;
use crate::config::DataSourceConfig;
use crate::hiring::applications::domain::{
    Application, ApplicationId, ApplicationStatus, Evaluation, Note,
};
use crate::hiring::applications::query::{ApplicationQuery, ApplicationSort};
use crate::hiring::applications::repository::ApplicationRepository;
use crate::hiring::jobs::domain::{Job, JobId, JobStatus};
use crate::hiring::jobs::query::{JobQuery, JobSort};
use crate::hiring::jobs::repository::JobRepository;
use crate::hiring::users::domain::{
    AuthSession, PasswordChange, ProfileUpdate, Registration, User,
};
use crate::hiring::users::repository::UserGateway;
use crate::hiring::{Envelope, PageMeta};
use crate::reports::DashboardStats;

/// Shared handle to the remote ATS backend.
#[derive(Debug)]
pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
    credential: RwLock<Option<String>>,
}

impl RemoteBackend {
    pub fn connect(config: &DataSourceConfig) -> Result<Self, RepositoryError> {
        let base_url = config
            .remote_base_url
            .clone()
            .ok_or_else(|| RepositoryError::Unavailable("remote base URL not configured".into()))?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|error| RepositoryError::Unavailable(error.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential: RwLock::new(config.remote_token.clone()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn credential(&self) -> Option<String> {
        self.credential.read().ok().and_then(|guard| guard.clone())
    }

    fn store_credential(&self, token: &str) {
        if let Ok(mut guard) = self.credential.write() {
            *guard = Some(token.to_string());
        }
    }

    fn clear_credential(&self) {
        if let Ok(mut guard) = self.credential.write() {
            *guard = None;
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credential() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Maps backend status codes onto repository errors. A 401 also drops
    /// the stored credential.
    async fn check(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RepositoryError> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => {
                self.clear_credential();
                Err(RepositoryError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            StatusCode::CONFLICT => Err(RepositoryError::Conflict),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(RepositoryError::Unavailable(format!(
                    "backend returned {status}: {body}"
                )))
            }
        }
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, RepositoryError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|error| RepositoryError::Unavailable(error.to_string()))?;
        self.check(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        what: &'static str,
    ) -> Result<T, RepositoryError> {
        let request = self.client.get(self.url(path)).query(params);
        decode(self.send(request).await?, what).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        what: &'static str,
    ) -> Result<T, RepositoryError> {
        let request = self.client.post(self.url(path)).json(body);
        decode(self.send(request).await?, what).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        what: &'static str,
    ) -> Result<T, RepositoryError> {
        let request = self.client.put(self.url(path)).json(body);
        decode(self.send(request).await?, what).await
    }

    async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        what: &'static str,
    ) -> Result<T, RepositoryError> {
        let request = self.client.patch(self.url(path)).json(body);
        decode(self.send(request).await?, what).await
    }
}

/// Wire body for `PATCH /jobs/:id/status`.
#[derive(Serialize)]
struct JobStatusBody {
    status: JobStatus,
}

/// Wire body for `PATCH /applications/:id/status`. The backend stamps the
/// transition date itself.
#[derive(Serialize)]
struct StatusChangeBody {
    status: ApplicationStatus,
    description: String,
}

/// Wire body for `POST /applications/:id/notes`. The backend assigns the
/// note id and date.
#[derive(Serialize)]
struct NoteBody<'a> {
    author: &'a str,
    content: &'a str,
}

/// Deserialization failures are surfaced, never papered over with defaults:
/// a backend drifting from the wire contract should be loud.
async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &'static str,
) -> Result<T, RepositoryError> {
    response
        .json()
        .await
        .map_err(|error| RepositoryError::Unavailable(format!("malformed {what} payload: {error}")))
}

const fn job_sort_param(sort: JobSort) -> &'static str {
    match sort {
        JobSort::DateDesc => "date-desc",
        JobSort::DateAsc => "date-asc",
        JobSort::TitleAsc => "title-asc",
    }
}

const fn application_sort_param(sort: ApplicationSort) -> &'static str {
    match sort {
        ApplicationSort::DateDesc => "date-desc",
        ApplicationSort::DateAsc => "date-asc",
        ApplicationSort::ScoreDesc => "score-desc",
    }
}

fn job_params(query: &JobQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("sort", job_sort_param(query.sort).to_string())];
    if let Some(search) = &query.search {
        params.push(("search", search.clone()));
    }
    if let Some(department) = &query.department {
        params.push(("department", department.clone()));
    }
    if let Some(location) = &query.location {
        params.push(("location", location.clone()));
    }
    if let Some(level) = query.experience_level {
        params.push(("experience_level", level.label().to_string()));
    }
    if let Some(status) = query.status {
        params.push(("status", status.label().to_string()));
    }
    if let Some(page) = query.page {
        params.push(("page", page.page.to_string()));
        params.push(("page_size", page.page_size.to_string()));
    }
    params
}

fn application_params(query: &ApplicationQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("sort", application_sort_param(query.sort).to_string())];
    if let Some(search) = &query.search {
        params.push(("search", search.clone()));
    }
    if let Some(job_id) = &query.job_id {
        params.push(("job_id", job_id.0.clone()));
    }
    if let Some(status) = query.status {
        params.push(("status", status.label().to_string()));
    }
    if let Some(department) = &query.department {
        params.push(("department", department.clone()));
    }
    if let Some(page) = query.page {
        params.push(("page", page.page.to_string()));
        params.push(("page_size", page.page_size.to_string()));
    }
    params
}

#[async_trait]
impl JobRepository for RemoteBackend {
    async fn list(
        &self,
        query: &JobQuery,
    ) -> Result<(Vec<Job>, Option<PageMeta>), RepositoryError> {
        let envelope: Envelope<Vec<Job>> = self
            .get_json("/jobs", &job_params(query), "job list")
            .await?;
        Ok((envelope.data, envelope.meta))
    }

    async fn get(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let path = format!("/jobs/{}", id.0);
        match self.get_json::<Envelope<Job>>(&path, &[], "job").await {
            Ok(envelope) => Ok(Some(envelope.data)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }

    async fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        let envelope: Envelope<Job> = self.post_json("/jobs", &job, "job").await?;
        Ok(envelope.data)
    }

    async fn update(&self, job: Job) -> Result<Job, RepositoryError> {
        let path = format!("/jobs/{}", job.id.0);
        let envelope: Envelope<Job> = self.put_json(&path, &job, "job").await?;
        Ok(envelope.data)
    }

    async fn set_status(&self, id: &JobId, status: JobStatus) -> Result<Job, RepositoryError> {
        let path = format!("/jobs/{}/status", id.0);
        let envelope: Envelope<Job> = self
            .patch_json(&path, &JobStatusBody { status }, "job")
            .await?;
        Ok(envelope.data)
    }

    async fn delete(&self, _id: &JobId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unsupported(
            "the remote backend closes jobs instead of deleting them",
        ))
    }
}

#[async_trait]
impl ApplicationRepository for RemoteBackend {
    async fn list(
        &self,
        query: &ApplicationQuery,
    ) -> Result<(Vec<Application>, Option<PageMeta>), RepositoryError> {
        let envelope: Envelope<Vec<Application>> = self
            .get_json("/applications", &application_params(query), "application list")
            .await?;
        Ok((envelope.data, envelope.meta))
    }

    async fn get(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let path = format!("/applications/{}", id.0);
        match self
            .get_json::<Envelope<Application>>(&path, &[], "application")
            .await
        {
            Ok(envelope) => Ok(Some(envelope.data)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }

    async fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        let envelope: Envelope<Application> = self
            .post_json("/applications", &application, "application")
            .await?;
        Ok(envelope.data)
    }

    async fn update(&self, application: Application) -> Result<Application, RepositoryError> {
        let path = format!("/applications/{}", application.id.0);
        let envelope: Envelope<Application> =
            self.put_json(&path, &application, "application").await?;
        Ok(envelope.data)
    }

    async fn set_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
        _date: NaiveDate,
        description: String,
    ) -> Result<Application, RepositoryError> {
        let path = format!("/applications/{}/status", id.0);
        let envelope: Envelope<Application> = self
            .patch_json(
                &path,
                &StatusChangeBody {
                    status,
                    description,
                },
                "application",
            )
            .await?;
        Ok(envelope.data)
    }

    async fn add_note(
        &self,
        id: &ApplicationId,
        note: Note,
    ) -> Result<Application, RepositoryError> {
        let path = format!("/applications/{}/notes", id.0);
        let envelope: Envelope<Application> = self
            .post_json(
                &path,
                &NoteBody {
                    author: &note.author,
                    content: &note.content,
                },
                "application",
            )
            .await?;
        Ok(envelope.data)
    }

    async fn set_evaluation(
        &self,
        id: &ApplicationId,
        evaluation: Evaluation,
    ) -> Result<Application, RepositoryError> {
        let path = format!("/applications/{}/evaluation", id.0);
        let envelope: Envelope<Application> =
            self.post_json(&path, &evaluation, "application").await?;
        Ok(envelope.data)
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl UserGateway for RemoteBackend {
    /// A successful login also refreshes the credential used by the entity
    /// repositories on this handle.
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, RepositoryError> {
        let envelope: Envelope<AuthSession> = self
            .post_json("/auth/login", &LoginBody { email, password }, "session")
            .await?;
        self.store_credential(&envelope.data.token);
        Ok(envelope.data)
    }

    async fn register(&self, registration: Registration) -> Result<AuthSession, RepositoryError> {
        let envelope: Envelope<AuthSession> = self
            .post_json("/auth/register", &registration, "session")
            .await?;
        self.store_credential(&envelope.data.token);
        Ok(envelope.data)
    }

    async fn me(&self, token: &str) -> Result<User, RepositoryError> {
        let request = self.client.get(self.url("/auth/me")).bearer_auth(token);
        let response = request
            .send()
            .await
            .map_err(|error| RepositoryError::Unavailable(error.to_string()))?;
        let envelope: Envelope<User> = decode(self.check(response).await?, "user").await?;
        Ok(envelope.data)
    }

    async fn update_profile(
        &self,
        token: &str,
        update: ProfileUpdate,
    ) -> Result<User, RepositoryError> {
        let request = self
            .client
            .put(self.url("/users/profile"))
            .bearer_auth(token)
            .json(&update);
        let response = request
            .send()
            .await
            .map_err(|error| RepositoryError::Unavailable(error.to_string()))?;
        let envelope: Envelope<User> = decode(self.check(response).await?, "user").await?;
        Ok(envelope.data)
    }

    async fn change_password(
        &self,
        token: &str,
        change: PasswordChange,
    ) -> Result<(), RepositoryError> {
        let request = self
            .client
            .put(self.url("/users/password"))
            .bearer_auth(token)
            .json(&change);
        let response = request
            .send()
            .await
            .map_err(|error| RepositoryError::Unavailable(error.to_string()))?;
        self.check(response).await?;
        Ok(())
    }

    /// The backend aggregates the dashboard itself; never recompute its
    /// numbers from a paged application listing.
    async fn stats(&self, token: &str) -> Result<Option<DashboardStats>, RepositoryError> {
        let request = self.client.get(self.url("/users/stats")).bearer_auth(token);
        let response = request
            .send()
            .await
            .map_err(|error| RepositoryError::Unavailable(error.to_string()))?;
        let envelope: Envelope<DashboardStats> =
            decode(self.check(response).await?, "dashboard stats").await?;
        Ok(Some(envelope.data))
    }
}
