//! In-memory data source used in mock mode and throughout the test suite.
//! Queries run through the same pure filter/sort functions the services
//! expose, so mock mode behaves like a faithful miniature of the backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::fixtures;
use super::RepositoryError;
use crate::hiring::applications::domain::{Application, ApplicationId};
use crate::hiring::applications::query as application_query;
use crate::hiring::applications::query::ApplicationQuery;
use crate::hiring::applications::repository::ApplicationRepository;
use crate::hiring::jobs::domain::{Job, JobId};
use crate::hiring::jobs::query as job_query;
use crate::hiring::jobs::query::JobQuery;
use crate::hiring::jobs::repository::JobRepository;
use crate::hiring::users::domain::{
    AuthSession, PasswordChange, ProfileUpdate, Registration, Role, User, UserId,
};
use crate::hiring::users::repository::UserGateway;
use crate::hiring::{paginate, PageMeta};

fn poisoned(_: impl std::fmt::Debug) -> RepositoryError {
    RepositoryError::Unavailable("in-memory store lock poisoned".to_string())
}

/// Job catalog held in a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepository {
    pub fn seeded() -> Self {
        Self {
            jobs: Mutex::new(fixtures::seed_jobs()),
        }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(
        &self,
        query: &JobQuery,
    ) -> Result<(Vec<Job>, Option<PageMeta>), RepositoryError> {
        let snapshot = self.jobs.lock().map_err(poisoned)?.clone();
        let filtered = job_query::filter_and_sort(snapshot, query);
        Ok(paginate(filtered, query.page))
    }

    async fn get(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let jobs = self.jobs.lock().map_err(poisoned)?;
        Ok(jobs.iter().find(|job| &job.id == id).cloned())
    }

    async fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut jobs = self.jobs.lock().map_err(poisoned)?;
        if jobs.iter().any(|existing| existing.id == job.id) {
            return Err(RepositoryError::Conflict);
        }
        jobs.push(job.clone());
        Ok(job)
    }

    async fn update(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut jobs = self.jobs.lock().map_err(poisoned)?;
        let slot = jobs
            .iter_mut()
            .find(|existing| existing.id == job.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = job.clone();
        Ok(job)
    }

    async fn delete(&self, id: &JobId) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.lock().map_err(poisoned)?;
        let before = jobs.len();
        jobs.retain(|job| &job.id != id);
        if jobs.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Applications held in a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryApplicationRepository {
    applications: Mutex<Vec<Application>>,
}

impl InMemoryApplicationRepository {
    pub fn seeded() -> Self {
        Self {
            applications: Mutex::new(fixtures::seed_applications()),
        }
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn list(
        &self,
        query: &ApplicationQuery,
    ) -> Result<(Vec<Application>, Option<PageMeta>), RepositoryError> {
        let snapshot = self.applications.lock().map_err(poisoned)?.clone();
        let filtered = application_query::filter_and_sort(snapshot, query);
        Ok(paginate(filtered, query.page))
    }

    async fn get(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let applications = self.applications.lock().map_err(poisoned)?;
        Ok(applications
            .iter()
            .find(|application| &application.id == id)
            .cloned())
    }

    async fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut applications = self.applications.lock().map_err(poisoned)?;
        if applications
            .iter()
            .any(|existing| existing.id == application.id)
        {
            return Err(RepositoryError::Conflict);
        }
        applications.push(application.clone());
        Ok(application)
    }

    async fn update(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut applications = self.applications.lock().map_err(poisoned)?;
        let slot = applications
            .iter_mut()
            .find(|existing| existing.id == application.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = application.clone();
        Ok(application)
    }
}

struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
struct UserTable {
    accounts: Vec<Account>,
    /// token -> account email
    sessions: HashMap<String, String>,
}

/// Credential table plus synthetic bearer sessions for mock mode.
#[derive(Default)]
pub struct InMemoryUserGateway {
    table: Mutex<UserTable>,
}

impl InMemoryUserGateway {
    pub fn seeded() -> Self {
        let accounts = fixtures::seed_users()
            .into_iter()
            .map(|(user, password)| Account { user, password })
            .collect();
        Self {
            table: Mutex::new(UserTable {
                accounts,
                sessions: HashMap::new(),
            }),
        }
    }
}

fn issue_token() -> String {
    format!("tok-{}", Uuid::new_v4())
}

impl UserTable {
    fn open_session(&mut self, email: &str) -> String {
        let token = issue_token();
        self.sessions.insert(token.clone(), email.to_string());
        token
    }

    fn account_for_token(&self, token: &str) -> Result<&Account, RepositoryError> {
        let email = self
            .sessions
            .get(token)
            .ok_or(RepositoryError::Unauthorized)?;
        self.accounts
            .iter()
            .find(|account| &account.user.email == email)
            .ok_or(RepositoryError::Unauthorized)
    }

    fn account_for_token_mut(&mut self, token: &str) -> Result<&mut Account, RepositoryError> {
        let email = self
            .sessions
            .get(token)
            .cloned()
            .ok_or(RepositoryError::Unauthorized)?;
        self.accounts
            .iter_mut()
            .find(|account| account.user.email == email)
            .ok_or(RepositoryError::Unauthorized)
    }
}

#[async_trait]
impl UserGateway for InMemoryUserGateway {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, RepositoryError> {
        let mut table = self.table.lock().map_err(poisoned)?;
        let user = table
            .accounts
            .iter()
            .find(|account| account.user.email == email && account.password == password)
            .map(|account| account.user.clone())
            .ok_or(RepositoryError::Unauthorized)?;
        let token = table.open_session(email);
        Ok(AuthSession { token, user })
    }

    async fn register(&self, registration: Registration) -> Result<AuthSession, RepositoryError> {
        let mut table = self.table.lock().map_err(poisoned)?;
        if table
            .accounts
            .iter()
            .any(|account| account.user.email == registration.email)
        {
            return Err(RepositoryError::Conflict);
        }

        let user = User {
            id: UserId(format!("user-{}", Uuid::new_v4())),
            email: registration.email.clone(),
            name: registration.name,
            phone: registration.phone,
            role: registration.role.unwrap_or(Role::Candidate),
            department: None,
            position: None,
        };
        table.accounts.push(Account {
            user: user.clone(),
            password: registration.password,
        });
        let token = table.open_session(&registration.email);
        Ok(AuthSession { token, user })
    }

    async fn me(&self, token: &str) -> Result<User, RepositoryError> {
        let table = self.table.lock().map_err(poisoned)?;
        Ok(table.account_for_token(token)?.user.clone())
    }

    async fn update_profile(
        &self,
        token: &str,
        update: ProfileUpdate,
    ) -> Result<User, RepositoryError> {
        let mut table = self.table.lock().map_err(poisoned)?;
        let account = table.account_for_token_mut(token)?;
        account.user.apply_update(update);
        Ok(account.user.clone())
    }

    async fn change_password(
        &self,
        token: &str,
        change: PasswordChange,
    ) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().map_err(poisoned)?;
        let account = table.account_for_token_mut(token)?;
        if account.password != change.current_password {
            return Err(RepositoryError::Unauthorized);
        }
        account.password = change.new_password;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hiring::PageRequest;

    #[tokio::test]
    async fn job_insert_conflicts_on_duplicate_ids() {
        let repository = InMemoryJobRepository::seeded();
        let existing = repository
            .get(&JobId("job-1".to_string()))
            .await
            .expect("get succeeds")
            .expect("seeded job present");

        match repository.insert(existing).await {
            Err(RepositoryError::Conflict) => {}
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn job_delete_removes_the_record() {
        let repository = InMemoryJobRepository::seeded();
        let id = JobId("job-4".to_string());
        repository.delete(&id).await.expect("delete succeeds");
        assert!(repository
            .get(&id)
            .await
            .expect("get succeeds")
            .is_none());
    }

    #[tokio::test]
    async fn application_list_honors_pagination() {
        let repository = InMemoryApplicationRepository::seeded();
        let (page, meta) = repository
            .list(&ApplicationQuery {
                page: Some(PageRequest {
                    page: 1,
                    page_size: 2,
                }),
                ..ApplicationQuery::default()
            })
            .await
            .expect("list succeeds");

        assert_eq!(page.len(), 2);
        let meta = meta.expect("meta echoed");
        assert_eq!(meta.page, 1);
        assert_eq!(meta.total, fixtures::seed_applications().len());
    }

    #[tokio::test]
    async fn update_of_a_missing_application_is_not_found() {
        let repository = InMemoryApplicationRepository::default();
        let mut ghost = fixtures::seed_applications().remove(0);
        ghost.id = ApplicationId("app-ghost".to_string());

        match repository.update(ghost).await {
            Err(RepositoryError::NotFound) => {}
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sessions_are_independent_per_login() {
        let gateway = InMemoryUserGateway::seeded();
        let first = gateway
            .login("hr@example.com", "hr-password")
            .await
            .expect("login succeeds");
        let second = gateway
            .login("hr@example.com", "hr-password")
            .await
            .expect("login succeeds");

        assert_ne!(first.token, second.token);
        assert_eq!(
            gateway.me(&first.token).await.expect("resolves").email,
            "hr@example.com"
        );
        assert_eq!(
            gateway.me(&second.token).await.expect("resolves").email,
            "hr@example.com"
        );
    }
}
