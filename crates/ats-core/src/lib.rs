//! Applicant tracking core: job catalog, candidate applications, the HR review
//! lifecycle, hiring-manager evaluations, notification dispatch, and reporting
//! aggregates, backed by a pluggable data source (in-memory fixtures or a
//! remote REST backend).

pub mod config;
pub mod datasource;
pub mod error;
pub mod hiring;
pub mod notify;
pub mod reports;
pub mod telemetry;
