use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use ats_core::config::AppConfig;
use ats_core::datasource::DataSource;
use ats_core::error::AppError;
use ats_core::hiring::applications::ApplicationService;
use ats_core::hiring::jobs::JobService;
use ats_core::hiring::users::AuthService;
use ats_core::notify::mailer::{self, Mailer};
use ats_core::notify::Notifier;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The three entity services, all sharing the data source resolved at
/// startup.
pub(crate) struct Services {
    pub(crate) jobs: Arc<JobService>,
    pub(crate) applications: Arc<ApplicationService>,
    pub(crate) auth: Arc<AuthService>,
}

pub(crate) fn build_services(config: &AppConfig) -> Result<Services, AppError> {
    let source = DataSource::from_config(config)?;
    let mailer: Arc<dyn Mailer> = Arc::from(mailer::from_config(&config.email));
    let notifier = Arc::new(Notifier::new(mailer));

    Ok(Services {
        jobs: Arc::new(JobService::new(source.jobs.clone())),
        applications: Arc::new(ApplicationService::new(
            source.applications.clone(),
            source.jobs,
            notifier,
        )),
        auth: Arc::new(AuthService::new(source.users, source.applications)),
    })
}
