use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::hiring::jobs::domain::JobId;

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Review stage an application sits in. `Hired` is a reachable terminal state
/// with no enforced predecessor; it is set out-of-band (e.g. by an HRIS) and
/// only appears in aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    Screening,
    Interview,
    Offer,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Screening => "screening",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Offer | ApplicationStatus::Rejected | ApplicationStatus::Hired
        )
    }
}

/// Candidate identity captured at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Education summary supplied by the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub gpa: Option<String>,
}

/// Prior work summary supplied by the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub duration: String,
}

/// The opening applied to, denormalized at write time so the record stays
/// readable after the job is edited or closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub job_id: JobId,
    pub title: String,
    pub department: String,
}

/// Reviewer note, append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_on: NaiveDate,
}

/// One lifecycle event, append-only, exactly one per transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: ApplicationStatus,
    pub date: NaiveDate,
    pub description: String,
}

/// Hiring-manager verdict attached to an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiringRecommendation {
    Recommend,
    NotRecommend,
    RequestInterview,
}

/// Per-criterion scores, 1–5 each. The four core criteria are always present;
/// extended criteria are free-form named categories with the same range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationScores {
    pub technical: u8,
    pub communication: u8,
    pub problem_solving: u8,
    pub culture_fit: u8,
    #[serde(default)]
    pub extended: BTreeMap<String, u8>,
}

impl EvaluationScores {
    pub fn all(&self) -> Vec<u8> {
        let mut scores = vec![
            self.technical,
            self.communication,
            self.problem_solving,
            self.culture_fit,
        ];
        scores.extend(self.extended.values().copied());
        scores
    }

    pub fn validate(&self) -> Result<(), String> {
        for score in self.all() {
            if !(1..=5).contains(&score) {
                return Err(format!("criterion scores must be 1-5, got {score}"));
            }
        }
        Ok(())
    }

    /// Arithmetic mean of every provided criterion score, rounded to two
    /// decimals for display.
    pub fn mean(&self) -> f64 {
        let scores = self.all();
        let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        let mean = f64::from(sum) / scores.len() as f64;
        (mean * 100.0).round() / 100.0
    }
}

/// A hiring manager's stored evaluation. Written once; a re-submission
/// silently overwrites the previous record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub evaluator: String,
    pub scores: EvaluationScores,
    pub overall_score: f64,
    pub comments: String,
    pub recommendation: HiringRecommendation,
    pub evaluated_on: NaiveDate,
}

/// Payload for submitting an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDraft {
    pub evaluator: String,
    pub scores: EvaluationScores,
    pub comments: String,
    pub recommendation: HiringRecommendation,
}

/// A candidate's application with its full review trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job: JobSnapshot,
    pub candidate: Candidate,
    pub cover_letter: String,
    /// Filename or path only; binaries are handled elsewhere.
    pub resume: String,
    pub education: Education,
    pub experience: Experience,
    pub skills: Vec<String>,
    /// Produced outside this system, 0-100.
    #[serde(default)]
    pub pre_screening_score: Option<u8>,
    pub status: ApplicationStatus,
    pub submitted_on: NaiveDate,
    pub notes: Vec<Note>,
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub evaluation: Option<Evaluation>,
}

impl Application {
    /// Builds a freshly submitted application: status `submitted`, one
    /// timeline entry, no notes, no evaluation.
    pub fn submitted(
        id: ApplicationId,
        job: JobSnapshot,
        submission: ApplicationSubmission,
        submitted_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            job,
            candidate: submission.candidate,
            cover_letter: submission.cover_letter,
            resume: submission.resume,
            education: submission.education,
            experience: submission.experience,
            skills: submission.skills,
            pre_screening_score: submission.pre_screening_score,
            status: ApplicationStatus::Submitted,
            submitted_on,
            notes: Vec::new(),
            timeline: vec![TimelineEntry {
                status: ApplicationStatus::Submitted,
                date: submitted_on,
                description: "Application received".to_string(),
            }],
            evaluation: None,
        }
    }

    /// The status must always equal the status of the most recent timeline
    /// entry; every constructor and transition maintains this.
    pub fn timeline_consistent(&self) -> bool {
        self.timeline
            .last()
            .is_some_and(|entry| entry.status == self.status)
    }

    /// Advances the lifecycle: appends exactly one timeline entry and sets
    /// the status. Skipped or backward moves are not rejected here; the
    /// offered transitions are constrained by [`super::lifecycle::forward_options`].
    pub fn apply_transition(
        &mut self,
        status: ApplicationStatus,
        date: NaiveDate,
        description: String,
    ) {
        self.timeline.push(TimelineEntry {
            status,
            date,
            description,
        });
        self.status = status;
    }

    /// Letter grade for the external pre-screening score, as shown on review
    /// screens: A >= 90, B >= 80, C >= 70, D below.
    pub fn pre_screening_grade(&self) -> Option<char> {
        self.pre_screening_score.map(|score| match score {
            90..=100 => 'A',
            80..=89 => 'B',
            70..=79 => 'C',
            _ => 'D',
        })
    }
}

/// Intake payload for a new application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub job_id: JobId,
    pub candidate: Candidate,
    #[serde(default)]
    pub cover_letter: String,
    pub resume: String,
    pub education: Education,
    pub experience: Experience,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub pre_screening_score: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(technical: u8, communication: u8, problem_solving: u8, culture_fit: u8) -> EvaluationScores {
        EvaluationScores {
            technical,
            communication,
            problem_solving,
            culture_fit,
            extended: BTreeMap::new(),
        }
    }

    #[test]
    fn mean_is_the_arithmetic_average_rounded_to_two_decimals() {
        assert!((scores(5, 5, 4, 5).mean() - 4.75).abs() < 0.005);
        assert!((scores(3, 4, 4, 3).mean() - 3.5).abs() < 0.005);

        let mut with_extended = scores(5, 4, 4, 4);
        with_extended.extended.insert("leadership".to_string(), 2);
        // (5+4+4+4+2)/5 = 3.8
        assert!((with_extended.mean() - 3.8).abs() < 0.005);
    }

    #[test]
    fn mean_rounds_repeating_fractions() {
        let mut s = scores(5, 5, 5, 4);
        s.extended.insert("initiative".to_string(), 3);
        s.extended.insert("reliability".to_string(), 3);
        // 25/6 = 4.1666... -> 4.17
        assert!((s.mean() - 4.17).abs() < 0.005);
    }

    #[test]
    fn scores_outside_range_fail_validation() {
        assert!(scores(0, 3, 3, 3).validate().is_err());
        assert!(scores(3, 6, 3, 3).validate().is_err());
        assert!(scores(1, 5, 3, 3).validate().is_ok());
    }

    #[test]
    fn pre_screening_grades_bucket_by_threshold() {
        let mut app = sample_application();
        for (score, grade) in [(95, 'A'), (90, 'A'), (85, 'B'), (72, 'C'), (69, 'D')] {
            app.pre_screening_score = Some(score);
            assert_eq!(app.pre_screening_grade(), Some(grade));
        }
        app.pre_screening_score = None;
        assert_eq!(app.pre_screening_grade(), None);
    }

    fn sample_application() -> Application {
        Application::submitted(
            ApplicationId("app-test".to_string()),
            JobSnapshot {
                job_id: crate::hiring::jobs::domain::JobId("job-1".to_string()),
                title: "Retail Sales Associate".to_string(),
                department: "Sales".to_string(),
            },
            ApplicationSubmission {
                job_id: crate::hiring::jobs::domain::JobId("job-1".to_string()),
                candidate: Candidate {
                    name: "Somchai Jaidee".to_string(),
                    email: "somchai@example.com".to_string(),
                    phone: "081-234-5678".to_string(),
                },
                cover_letter: "I would like to apply.".to_string(),
                resume: "somchai-resume.pdf".to_string(),
                education: Education {
                    degree: "BBA".to_string(),
                    institution: "Ramkhamhaeng University".to_string(),
                    gpa: Some("3.25".to_string()),
                },
                experience: Experience {
                    position: "Sales Associate".to_string(),
                    company: "IT Shop".to_string(),
                    duration: "2 years".to_string(),
                },
                skills: vec!["Sales".to_string()],
                pre_screening_score: Some(85),
            },
            chrono::NaiveDate::from_ymd_opt(2025, 9, 28).expect("valid date"),
        )
    }

    #[test]
    fn submitted_applications_start_consistent() {
        let app = sample_application();
        assert_eq!(app.status, ApplicationStatus::Submitted);
        assert_eq!(app.timeline.len(), 1);
        assert!(app.notes.is_empty());
        assert!(app.timeline_consistent());
    }

    #[test]
    fn transitions_keep_status_and_timeline_in_lockstep() {
        let mut app = sample_application();
        let date = chrono::NaiveDate::from_ymd_opt(2025, 9, 29).expect("valid date");
        app.apply_transition(ApplicationStatus::Screening, date, "HR reviewing".to_string());
        app.apply_transition(ApplicationStatus::Interview, date, "Interview booked".to_string());

        assert_eq!(app.status, ApplicationStatus::Interview);
        assert_eq!(app.timeline.len(), 3);
        assert!(app.timeline_consistent());
    }
}
