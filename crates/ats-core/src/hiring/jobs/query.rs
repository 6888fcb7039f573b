use serde::{Deserialize, Serialize};

use super::domain::{ExperienceLevel, Job, JobStatus};
use crate::hiring::PageRequest;

/// Immutable description of one job listing read: which openings to keep and
/// in what order. Built once per request and handed to the pure functions
/// below, so the predicate logic never depends on page state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    /// Case-insensitive substring matched against title and description.
    pub search: Option<String>,
    /// Case-insensitive substring matched against the department name.
    pub department: Option<String>,
    /// Case-insensitive substring matched against the location.
    pub location: Option<String>,
    /// Exact enum match.
    pub experience_level: Option<ExperienceLevel>,
    /// Exact enum match.
    pub status: Option<JobStatus>,
    pub sort: JobSort,
    pub page: Option<PageRequest>,
}

/// Sort orders offered by the listing screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobSort {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn matches(job: &Job, query: &JobQuery) -> bool {
    if let Some(search) = &query.search {
        if !contains_ci(&job.title, search) && !contains_ci(&job.description, search) {
            return false;
        }
    }
    if let Some(department) = &query.department {
        if !contains_ci(&job.department, department) {
            return false;
        }
    }
    if let Some(location) = &query.location {
        if !contains_ci(&job.location, location) {
            return false;
        }
    }
    if let Some(level) = query.experience_level {
        if job.experience_level != level {
            return false;
        }
    }
    if let Some(status) = query.status {
        if job.status != status {
            return false;
        }
    }
    true
}

/// Pure filter + sort over a snapshot of the catalog. Pagination is applied
/// separately by the caller so the total can be echoed in the envelope.
pub fn filter_and_sort(mut jobs: Vec<Job>, query: &JobQuery) -> Vec<Job> {
    jobs.retain(|job| matches(job, query));
    match query.sort {
        JobSort::DateDesc => jobs.sort_by(|a, b| b.posted_on.cmp(&a.posted_on)),
        JobSort::DateAsc => jobs.sort_by(|a, b| a.posted_on.cmp(&b.posted_on)),
        JobSort::TitleAsc => jobs.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hiring::jobs::domain::JobId;
    use chrono::NaiveDate;

    fn job(id: &str, title: &str, location: &str, status: JobStatus, posted: (i32, u32, u32)) -> Job {
        Job {
            id: JobId(id.to_string()),
            title: title.to_string(),
            department: "Sales".to_string(),
            location: location.to_string(),
            experience_level: ExperienceLevel::Entry,
            description: "Storefront role".to_string(),
            requirements: vec![],
            responsibilities: vec![],
            status,
            posted_on: NaiveDate::from_ymd_opt(posted.0, posted.1, posted.2).expect("valid date"),
            closing_on: None,
        }
    }

    #[test]
    fn status_and_location_predicates_combine() {
        let jobs = vec![
            job("job-1", "Sales Associate", "Central Ladprao Branch", JobStatus::Active, (2025, 9, 15)),
            job("job-2", "Sales Associate", "Head Office", JobStatus::Active, (2025, 9, 20)),
            job("job-3", "Sales Associate", "Central Rama 9 Branch", JobStatus::Closed, (2025, 9, 10)),
        ];

        let query = JobQuery {
            status: Some(JobStatus::Active),
            location: Some("central".to_string()),
            ..JobQuery::default()
        };

        let hits = filter_and_sort(jobs, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, JobId("job-1".to_string()));
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let jobs = vec![
            job("job-1", "Warehouse Associate", "Navanakorn DC", JobStatus::Active, (2025, 10, 1)),
            job("job-2", "IT Support Coordinator", "Head Office", JobStatus::Active, (2025, 9, 18)),
        ];

        let query = JobQuery {
            search: Some("WAREHOUSE".to_string()),
            ..JobQuery::default()
        };
        assert_eq!(filter_and_sort(jobs.clone(), &query).len(), 1);

        let query = JobQuery {
            search: Some("storefront".to_string()),
            ..JobQuery::default()
        };
        assert_eq!(filter_and_sort(jobs, &query).len(), 2);
    }

    #[test]
    fn date_sorts_invert_each_other() {
        let jobs = vec![
            job("job-1", "A", "X", JobStatus::Active, (2025, 9, 15)),
            job("job-2", "B", "X", JobStatus::Active, (2025, 10, 1)),
            job("job-3", "C", "X", JobStatus::Active, (2025, 9, 20)),
        ];

        let desc = filter_and_sort(jobs.clone(), &JobQuery { sort: JobSort::DateDesc, ..JobQuery::default() });
        let asc = filter_and_sort(jobs, &JobQuery { sort: JobSort::DateAsc, ..JobQuery::default() });

        assert_eq!(desc.first().map(|j| j.id.clone()), asc.last().map(|j| j.id.clone()));
        assert_eq!(desc.last().map(|j| j.id.clone()), asc.first().map(|j| j.id.clone()));
    }
}
