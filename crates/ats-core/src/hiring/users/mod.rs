//! User accounts and authentication: mock credential-table login or a
//! bearer-token exchange against the remote backend, plus profile upkeep and
//! the dashboard statistics endpoint.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{AuthSession, PasswordChange, ProfileUpdate, Registration, Role, User, UserId};
pub use repository::UserGateway;
pub use router::user_router;
pub use service::{AuthService, AuthServiceError};
