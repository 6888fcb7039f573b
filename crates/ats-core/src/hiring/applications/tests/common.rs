use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;
use uuid::Uuid;

use crate::datasource::memory::{InMemoryApplicationRepository, InMemoryJobRepository};
use crate::hiring::applications::domain::{
    ApplicationSubmission, Candidate, Education, Experience,
};
use crate::hiring::applications::{application_router, ApplicationService};
use crate::hiring::jobs::domain::JobId;
use crate::notify::mailer::{Mailer, MailerError, Receipt};
use crate::notify::{EmailMessage, Notifier};

pub(super) fn submission(job_id: &str) -> ApplicationSubmission {
    ApplicationSubmission {
        job_id: JobId(job_id.to_string()),
        candidate: Candidate {
            name: "Kanya Srisuk".to_string(),
            email: "kanya.srisuk@example.com".to_string(),
            phone: "089-555-0142".to_string(),
        },
        cover_letter: "I have five years of retail experience.".to_string(),
        resume: "kanya-srisuk-resume.pdf".to_string(),
        education: Education {
            degree: "BBA Marketing".to_string(),
            institution: "Chiang Mai University".to_string(),
            gpa: Some("3.41".to_string()),
        },
        experience: Experience {
            position: "Store Supervisor".to_string(),
            company: "Northern Retail Co.".to_string(),
            duration: "5 years".to_string(),
        },
        skills: vec!["POS systems".to_string(), "Team leadership".to_string()],
        pre_screening_score: Some(88),
    }
}

/// Provider that records every accepted message.
#[derive(Default)]
pub(super) struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    pub(super) fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("mailer lock").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<Receipt, MailerError> {
        self.sent.lock().expect("mailer lock").push(message.clone());
        Ok(Receipt {
            message_id: format!("recorded-{}", Uuid::new_v4()),
        })
    }
}

/// Provider that fails every send.
pub(super) struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<Receipt, MailerError> {
        Err(MailerError::Transport("connection refused".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<ApplicationService>,
    Arc<InMemoryApplicationRepository>,
    Arc<RecordingMailer>,
) {
    let repository = Arc::new(InMemoryApplicationRepository::seeded());
    let mailer = Arc::new(RecordingMailer::default());
    let service = Arc::new(ApplicationService::new(
        repository.clone(),
        Arc::new(InMemoryJobRepository::seeded()),
        Arc::new(Notifier::new(mailer.clone())),
    ));
    (service, repository, mailer)
}

pub(super) fn build_service_with_failing_mailer() -> Arc<ApplicationService> {
    Arc::new(ApplicationService::new(
        Arc::new(InMemoryApplicationRepository::seeded()),
        Arc::new(InMemoryJobRepository::seeded()),
        Arc::new(Notifier::new(Arc::new(FailingMailer))),
    ))
}

pub(super) fn router_with_service(service: Arc<ApplicationService>) -> axum::Router {
    application_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
