//! Job catalog: openings posted by HR, filtered and sorted for candidate
//! browsing and HR management screens.

pub mod domain;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{ExperienceLevel, Job, JobDraft, JobId, JobStatus, JobUpdate};
pub use query::{JobQuery, JobSort};
pub use repository::JobRepository;
pub use router::job_router;
pub use service::{JobService, JobServiceError};
