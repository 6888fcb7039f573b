use std::sync::Arc;

use super::domain::{AuthSession, PasswordChange, ProfileUpdate, Registration, User};
use super::repository::UserGateway;
use crate::datasource::RepositoryError;
use crate::hiring::applications::query::ApplicationQuery;
use crate::hiring::applications::repository::ApplicationRepository;
use crate::reports::{self, DashboardStats};

const MIN_PASSWORD_LEN: usize = 6;

/// Service wrapping the account gateway plus the application store, which
/// backs the authenticated dashboard statistics.
pub struct AuthService {
    gateway: Arc<dyn UserGateway>,
    applications: Arc<dyn ApplicationRepository>,
}

impl AuthService {
    pub fn new(
        gateway: Arc<dyn UserGateway>,
        applications: Arc<dyn ApplicationRepository>,
    ) -> Self {
        Self {
            gateway,
            applications,
        }
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthServiceError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthServiceError::Validation(
                "email and password are required".into(),
            ));
        }
        Ok(self.gateway.login(email, password).await?)
    }

    pub async fn register(
        &self,
        registration: Registration,
    ) -> Result<AuthSession, AuthServiceError> {
        if !registration.email.contains('@') {
            return Err(AuthServiceError::Validation(format!(
                "'{}' is not a valid email address",
                registration.email
            )));
        }
        if registration.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthServiceError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if registration.name.trim().is_empty() {
            return Err(AuthServiceError::Validation(
                "name must not be empty".into(),
            ));
        }
        Ok(self.gateway.register(registration).await?)
    }

    pub async fn me(&self, token: &str) -> Result<User, AuthServiceError> {
        Ok(self.gateway.me(token).await?)
    }

    pub async fn update_profile(
        &self,
        token: &str,
        update: ProfileUpdate,
    ) -> Result<User, AuthServiceError> {
        if matches!(&update.name, Some(name) if name.trim().is_empty()) {
            return Err(AuthServiceError::Validation(
                "name must not be empty".into(),
            ));
        }
        Ok(self.gateway.update_profile(token, update).await?)
    }

    pub async fn change_password(
        &self,
        token: &str,
        change: PasswordChange,
    ) -> Result<(), AuthServiceError> {
        if change.new_password.len() < MIN_PASSWORD_LEN {
            return Err(AuthServiceError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if change.new_password == change.current_password {
            return Err(AuthServiceError::Validation(
                "new password must differ from the current one".into(),
            ));
        }
        Ok(self.gateway.change_password(token, change).await?)
    }

    /// Dashboard aggregates, role-agnostic. Backends that roll the numbers
    /// up themselves answer directly; otherwise a valid session is required
    /// and the stats are computed over the whole applications store.
    pub async fn dashboard(&self, token: &str) -> Result<DashboardStats, AuthServiceError> {
        if let Some(stats) = self.gateway.stats(token).await? {
            return Ok(stats);
        }
        self.gateway.me(token).await?;
        let (applications, _) = self
            .applications
            .list(&ApplicationQuery::default())
            .await?;
        Ok(reports::dashboard(&applications))
    }
}

/// Error raised by the auth service.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("invalid account payload: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
