//! Notification dispatch: lifecycle events are mapped to templated e-mail
//! payloads and handed to a provider. Delivery is strictly best-effort; a
//! failed send is logged as a warning and never unwinds the state change
//! that triggered it.

pub mod mailer;
pub mod templates;

use std::sync::Arc;

use tracing::{info, warn};

use crate::hiring::applications::domain::{Application, ApplicationStatus};
use mailer::Mailer;

/// Outbound message handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Which template a lifecycle event resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    ApplicationSubmitted,
    StatusUpdate,
    InterviewInvitation,
    OfferLetter,
    Rejection,
}

/// Every transition dispatches exactly one notice, keyed by the new status.
pub const fn notice_for_transition(status: ApplicationStatus) -> NoticeKind {
    match status {
        ApplicationStatus::Interview => NoticeKind::InterviewInvitation,
        ApplicationStatus::Offer => NoticeKind::OfferLetter,
        ApplicationStatus::Rejected => NoticeKind::Rejection,
        _ => NoticeKind::StatusUpdate,
    }
}

/// Dispatches templated notices through the configured mailer.
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Confirmation sent to the candidate on a successful submission.
    /// Returns whether delivery succeeded; failures are only logged.
    pub async fn application_submitted(&self, application: &Application) -> bool {
        let message = templates::render(NoticeKind::ApplicationSubmitted, application);
        self.send_best_effort(message).await
    }

    /// One notice per status transition, keyed by the new status.
    pub async fn status_changed(&self, application: &Application) -> bool {
        let message = templates::render(notice_for_transition(application.status), application);
        self.send_best_effort(message).await
    }

    async fn send_best_effort(&self, message: EmailMessage) -> bool {
        match self.mailer.send(&message).await {
            Ok(receipt) => {
                info!(to = %message.to, message_id = %receipt.message_id, "notification sent");
                true
            }
            Err(error) => {
                warn!(to = %message.to, %error, "notification dispatch failed; continuing");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_notices_key_off_the_new_status() {
        assert_eq!(
            notice_for_transition(ApplicationStatus::Interview),
            NoticeKind::InterviewInvitation
        );
        assert_eq!(
            notice_for_transition(ApplicationStatus::Offer),
            NoticeKind::OfferLetter
        );
        assert_eq!(
            notice_for_transition(ApplicationStatus::Rejected),
            NoticeKind::Rejection
        );
        assert_eq!(
            notice_for_transition(ApplicationStatus::Screening),
            NoticeKind::StatusUpdate
        );
        assert_eq!(
            notice_for_transition(ApplicationStatus::Hired),
            NoticeKind::StatusUpdate
        );
    }
}
