use async_trait::async_trait;

use super::domain::{AuthSession, PasswordChange, ProfileUpdate, Registration, User};
use crate::datasource::RepositoryError;
use crate::reports::DashboardStats;

/// Account and session seam. The mock gateway keeps a credential table and
/// hands out synthetic tokens; the remote gateway forwards to the backend's
/// auth endpoints. Bad credentials and unknown tokens both surface as
/// [`RepositoryError::Unauthorized`].
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, RepositoryError>;

    async fn register(&self, registration: Registration) -> Result<AuthSession, RepositoryError>;

    /// Resolves a bearer token to the account it authenticates.
    async fn me(&self, token: &str) -> Result<User, RepositoryError>;

    async fn update_profile(
        &self,
        token: &str,
        update: ProfileUpdate,
    ) -> Result<User, RepositoryError>;

    async fn change_password(
        &self,
        token: &str,
        change: PasswordChange,
    ) -> Result<(), RepositoryError>;

    /// Server-side dashboard rollup, for backends that aggregate themselves.
    /// Sources without one return `None` and the caller computes the numbers
    /// over its own application store.
    async fn stats(&self, _token: &str) -> Result<Option<DashboardStats>, RepositoryError> {
        Ok(None)
    }
}
