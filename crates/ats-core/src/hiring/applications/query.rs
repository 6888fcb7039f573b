use serde::{Deserialize, Serialize};

use super::domain::{Application, ApplicationStatus};
use crate::hiring::jobs::domain::JobId;
use crate::hiring::PageRequest;

/// Immutable description of one applications read, mirroring the filter bar
/// on the review screens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationQuery {
    /// Case-insensitive substring matched against candidate name and email.
    pub search: Option<String>,
    /// Exact match on the referenced job.
    pub job_id: Option<JobId>,
    /// Exact enum match.
    pub status: Option<ApplicationStatus>,
    /// Case-insensitive substring matched against the denormalized department.
    pub department: Option<String>,
    pub sort: ApplicationSort,
    pub page: Option<PageRequest>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationSort {
    #[default]
    DateDesc,
    DateAsc,
    /// Pre-screening score, highest first; unscored applications sort last.
    ScoreDesc,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn matches(application: &Application, query: &ApplicationQuery) -> bool {
    if let Some(search) = &query.search {
        if !contains_ci(&application.candidate.name, search)
            && !contains_ci(&application.candidate.email, search)
        {
            return false;
        }
    }
    if let Some(job_id) = &query.job_id {
        if &application.job.job_id != job_id {
            return false;
        }
    }
    if let Some(status) = query.status {
        if application.status != status {
            return false;
        }
    }
    if let Some(department) = &query.department {
        if !contains_ci(&application.job.department, department) {
            return false;
        }
    }
    true
}

/// Pure filter + sort over a snapshot of the applications list.
pub fn filter_and_sort(
    mut applications: Vec<Application>,
    query: &ApplicationQuery,
) -> Vec<Application> {
    applications.retain(|application| matches(application, query));
    match query.sort {
        ApplicationSort::DateDesc => {
            applications.sort_by(|a, b| b.submitted_on.cmp(&a.submitted_on))
        }
        ApplicationSort::DateAsc => {
            applications.sort_by(|a, b| a.submitted_on.cmp(&b.submitted_on))
        }
        ApplicationSort::ScoreDesc => applications.sort_by(|a, b| {
            b.pre_screening_score
                .unwrap_or(0)
                .cmp(&a.pre_screening_score.unwrap_or(0))
        }),
    }
    applications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::fixtures;

    #[test]
    fn date_sorts_invert_first_and_last() {
        let applications = fixtures::seed_applications();
        assert!(applications.len() >= 3, "fixtures drive this test");

        let desc = filter_and_sort(applications.clone(), &ApplicationQuery {
            sort: ApplicationSort::DateDesc,
            ..ApplicationQuery::default()
        });
        let asc = filter_and_sort(applications, &ApplicationQuery {
            sort: ApplicationSort::DateAsc,
            ..ApplicationQuery::default()
        });

        assert_eq!(
            desc.first().map(|a| a.submitted_on),
            asc.last().map(|a| a.submitted_on)
        );
        assert_eq!(
            desc.last().map(|a| a.submitted_on),
            asc.first().map(|a| a.submitted_on)
        );
    }

    #[test]
    fn status_filter_is_exact() {
        let applications = fixtures::seed_applications();
        let hits = filter_and_sort(applications, &ApplicationQuery {
            status: Some(ApplicationStatus::Interview),
            ..ApplicationQuery::default()
        });
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|a| a.status == ApplicationStatus::Interview));
    }

    #[test]
    fn job_filter_keeps_only_that_opening() {
        let applications = fixtures::seed_applications();
        let job_id = applications[0].job.job_id.clone();
        let hits = filter_and_sort(applications, &ApplicationQuery {
            job_id: Some(job_id.clone()),
            ..ApplicationQuery::default()
        });
        assert!(hits.iter().all(|a| a.job.job_id == job_id));
    }

    #[test]
    fn score_sort_puts_unscored_last() {
        let mut applications = fixtures::seed_applications();
        applications[0].pre_screening_score = None;
        let sorted = filter_and_sort(applications, &ApplicationQuery {
            sort: ApplicationSort::ScoreDesc,
            ..ApplicationQuery::default()
        });
        assert!(sorted.last().expect("non-empty").pre_screening_score.is_none());
    }
}
