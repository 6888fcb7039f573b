//! Candidate applications: intake, the HR review lifecycle, notes,
//! hiring-manager evaluations, and the status timeline.

pub mod domain;
pub mod lifecycle;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationSubmission, Candidate, Education,
    Evaluation, EvaluationDraft, EvaluationScores, Experience, HiringRecommendation, JobSnapshot,
    Note, TimelineEntry,
};
pub use lifecycle::forward_options;
pub use query::{ApplicationQuery, ApplicationSort};
pub use repository::ApplicationRepository;
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError, TransitionOutcome};
