//! Pure template functions: (event, application) -> (recipient, subject,
//! HTML body). No delivery concerns live here.

use super::{EmailMessage, NoticeKind};
use crate::hiring::applications::domain::Application;

pub fn render(kind: NoticeKind, application: &Application) -> EmailMessage {
    match kind {
        NoticeKind::ApplicationSubmitted => application_submitted(application),
        NoticeKind::StatusUpdate => status_update(application),
        NoticeKind::InterviewInvitation => interview_invitation(application),
        NoticeKind::OfferLetter => offer_letter(application),
        NoticeKind::Rejection => rejection(application),
    }
}

fn application_submitted(application: &Application) -> EmailMessage {
    EmailMessage {
        to: application.candidate.email.clone(),
        subject: format!("Application received: {}", application.job.title),
        html_body: format!(
            "<h2>Application received</h2>\
             <p>Hello {name},</p>\
             <p>We have received your application for <strong>{title}</strong> \
             ({department}).</p>\
             <p>Application reference: {id}</p>\
             <p>The HR team will review your application within 1-3 business days. \
             You can track its status at any time.</p>",
            name = application.candidate.name,
            title = application.job.title,
            department = application.job.department,
            id = application.id.0,
        ),
    }
}

fn status_update(application: &Application) -> EmailMessage {
    EmailMessage {
        to: application.candidate.email.clone(),
        subject: format!("Application status update: {}", application.status.label()),
        html_body: format!(
            "<h2>Status update</h2>\
             <p>Hello {name},</p>\
             <p>The status of your application for <strong>{title}</strong> has \
             changed to <strong>{status}</strong>.</p>\
             <p>We will contact you within 3-5 business days with next steps.</p>",
            name = application.candidate.name,
            title = application.job.title,
            status = application.status.label(),
        ),
    }
}

fn interview_invitation(application: &Application) -> EmailMessage {
    EmailMessage {
        to: application.candidate.email.clone(),
        subject: "Interview invitation".to_string(),
        html_body: format!(
            "<h2>Congratulations! You passed the initial screening</h2>\
             <p>Hello {name},</p>\
             <p>We would like to invite you to interview for \
             <strong>{title}</strong> ({department}).</p>\
             <p>Please bring a printed resume and any supporting documents. \
             The HR team will follow up with the exact schedule and location.</p>\
             <p>If you cannot attend, please reply within 24 hours.</p>",
            name = application.candidate.name,
            title = application.job.title,
            department = application.job.department,
        ),
    }
}

fn offer_letter(application: &Application) -> EmailMessage {
    EmailMessage {
        to: application.candidate.email.clone(),
        subject: format!("Job offer: {}", application.job.title),
        html_body: format!(
            "<h2>Congratulations! You have received an offer</h2>\
             <p>Hello {name},</p>\
             <p>We are pleased to offer you the position of \
             <strong>{title}</strong> in {department}.</p>\
             <p>The full offer letter with compensation, start date, and \
             benefits is attached. Please respond within 7 days.</p>",
            name = application.candidate.name,
            title = application.job.title,
            department = application.job.department,
        ),
    }
}

fn rejection(application: &Application) -> EmailMessage {
    EmailMessage {
        to: application.candidate.email.clone(),
        subject: "Thank you for your interest".to_string(),
        html_body: format!(
            "<h2>Thank you for your interest</h2>\
             <p>Hello {name},</p>\
             <p>Thank you for applying for <strong>{title}</strong>. After \
             careful consideration we have decided to move forward with other \
             candidates whose qualifications more closely match the role.</p>\
             <p>We encourage you to keep an eye on our openings and hope to \
             consider your application again in the future.</p>",
            name = application.candidate.name,
            title = application.job.title,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::fixtures;

    #[test]
    fn every_notice_addresses_the_candidate() {
        let application = &fixtures::seed_applications()[0];
        for kind in [
            NoticeKind::ApplicationSubmitted,
            NoticeKind::StatusUpdate,
            NoticeKind::InterviewInvitation,
            NoticeKind::OfferLetter,
            NoticeKind::Rejection,
        ] {
            let message = render(kind, application);
            assert_eq!(message.to, application.candidate.email);
            assert!(!message.subject.is_empty());
            assert!(message.html_body.contains(&application.candidate.name));
        }
    }

    #[test]
    fn offer_subject_names_the_position() {
        let application = &fixtures::seed_applications()[0];
        let message = render(NoticeKind::OfferLetter, application);
        assert!(message.subject.contains(&application.job.title));
    }
}
