//! The review state machine: `submitted -> screening -> interview ->
//! {offer | rejected}`. Offer and rejected are terminal; `hired` is terminal
//! too but has no in-product transition leading into it.

use super::domain::ApplicationStatus;

/// Forward transitions a review screen offers for the current status. The
/// data model itself does not reject other moves; this is the contract the
/// presented actions follow, and nothing here ever offers a backward step.
pub const fn forward_options(status: ApplicationStatus) -> &'static [ApplicationStatus] {
    match status {
        ApplicationStatus::Submitted => &[ApplicationStatus::Screening],
        ApplicationStatus::Screening => {
            &[ApplicationStatus::Interview, ApplicationStatus::Rejected]
        }
        ApplicationStatus::Interview => &[ApplicationStatus::Offer, ApplicationStatus::Rejected],
        ApplicationStatus::Offer | ApplicationStatus::Rejected | ApplicationStatus::Hired => &[],
    }
}

/// Default human description recorded on the timeline when the operator does
/// not supply one.
pub fn default_description(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Submitted => "Application received",
        ApplicationStatus::Screening => "HR is reviewing the application",
        ApplicationStatus::Interview => "Interview scheduled",
        ApplicationStatus::Offer => "Offer extended",
        ApplicationStatus::Rejected => "Application was not successful",
        ApplicationStatus::Hired => "Candidate hired",
    }
}
