use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for posted jobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Seniority expected for an opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

/// Publication state of an opening. Jobs are never hard-deleted by the remote
/// backend; closing an opening is a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Closed,
    Draft,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
            JobStatus::Draft => "draft",
        }
    }
}

/// A posted opening as shown to candidates and managed by HR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    pub experience_level: ExperienceLevel,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub status: JobStatus,
    pub posted_on: NaiveDate,
    pub closing_on: Option<NaiveDate>,
}

impl Job {
    pub fn from_draft(id: JobId, posted_on: NaiveDate, draft: JobDraft) -> Self {
        Self {
            id,
            title: draft.title,
            department: draft.department,
            location: draft.location,
            experience_level: draft.experience_level,
            description: draft.description,
            requirements: draft.requirements,
            responsibilities: draft.responsibilities,
            status: draft.status.unwrap_or(JobStatus::Draft),
            posted_on,
            closing_on: draft.closing_on,
        }
    }

    /// Applies an HR edit, replacing only the fields the update carries.
    pub fn apply_update(&mut self, update: JobUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(level) = update.experience_level {
            self.experience_level = level;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(requirements) = update.requirements {
            self.requirements = requirements;
        }
        if let Some(responsibilities) = update.responsibilities {
            self.responsibilities = responsibilities;
        }
        if let Some(closing_on) = update.closing_on {
            self.closing_on = Some(closing_on);
        }
    }
}

/// Payload for creating an opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub experience_level: ExperienceLevel,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub closing_on: Option<NaiveDate>,
}

/// Partial HR edit of an existing opening.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default)]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default)]
    pub closing_on: Option<NaiveDate>,
}
