//! Seed data for the in-memory data source: a small but fully connected
//! hiring pipeline, so filters, transitions, and the dashboard all have
//! something to show without a backend.

use chrono::NaiveDate;

use crate::hiring::applications::domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, Education, Evaluation,
    EvaluationScores, Experience, HiringRecommendation, JobSnapshot, Note, TimelineEntry,
};
use crate::hiring::jobs::domain::{ExperienceLevel, Job, JobId, JobStatus};
use crate::hiring::users::domain::{Role, User, UserId};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are static")
}

pub fn seed_jobs() -> Vec<Job> {
    vec![
        Job {
            id: JobId("job-1".to_string()),
            title: "Retail Sales Associate".to_string(),
            department: "Sales".to_string(),
            location: "Bangkok".to_string(),
            experience_level: ExperienceLevel::Entry,
            description: "Front-of-store sales and customer service for our flagship branch."
                .to_string(),
            requirements: vec![
                "High school diploma or equivalent".to_string(),
                "Comfortable with POS systems".to_string(),
            ],
            responsibilities: vec![
                "Assist walk-in customers".to_string(),
                "Keep the sales floor stocked".to_string(),
            ],
            status: JobStatus::Active,
            posted_on: date(2025, 9, 1),
            closing_on: Some(date(2025, 10, 31)),
        },
        Job {
            id: JobId("job-2".to_string()),
            title: "Senior Software Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "Bangkok".to_string(),
            experience_level: ExperienceLevel::Senior,
            description: "Own services across the order and inventory platform.".to_string(),
            requirements: vec![
                "5+ years building backend services".to_string(),
                "Production experience with a typed language".to_string(),
            ],
            responsibilities: vec![
                "Design and review service APIs".to_string(),
                "Mentor mid-level engineers".to_string(),
            ],
            status: JobStatus::Active,
            posted_on: date(2025, 8, 18),
            closing_on: None,
        },
        Job {
            id: JobId("job-3".to_string()),
            title: "Marketing Specialist".to_string(),
            department: "Marketing".to_string(),
            location: "Chiang Mai".to_string(),
            experience_level: ExperienceLevel::Mid,
            description: "Run regional campaigns and own the social calendar.".to_string(),
            requirements: vec!["2+ years in digital marketing".to_string()],
            responsibilities: vec![
                "Plan monthly campaigns".to_string(),
                "Report on channel performance".to_string(),
            ],
            status: JobStatus::Active,
            posted_on: date(2025, 9, 10),
            closing_on: Some(date(2025, 11, 15)),
        },
        Job {
            id: JobId("job-4".to_string()),
            title: "HR Coordinator".to_string(),
            department: "People".to_string(),
            location: "Bangkok".to_string(),
            experience_level: ExperienceLevel::Entry,
            description: "Support recruiting logistics and onboarding.".to_string(),
            requirements: vec!["Strong scheduling and communication skills".to_string()],
            responsibilities: vec!["Coordinate interviews".to_string()],
            status: JobStatus::Closed,
            posted_on: date(2025, 7, 1),
            closing_on: Some(date(2025, 8, 15)),
        },
        Job {
            id: JobId("job-5".to_string()),
            title: "Data Analyst".to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            experience_level: ExperienceLevel::Mid,
            description: "Build reporting for merchandising and store operations.".to_string(),
            requirements: vec![
                "SQL fluency".to_string(),
                "Experience with BI tooling".to_string(),
            ],
            responsibilities: vec!["Maintain the weekly trading dashboard".to_string()],
            status: JobStatus::Active,
            posted_on: date(2025, 9, 22),
            closing_on: None,
        },
        Job {
            id: JobId("job-6".to_string()),
            title: "Store Manager".to_string(),
            department: "Sales".to_string(),
            location: "Phuket".to_string(),
            experience_level: ExperienceLevel::Senior,
            description: "Open and run the new Phuket branch.".to_string(),
            requirements: vec!["3+ years managing a retail team".to_string()],
            responsibilities: vec![
                "Hire and schedule branch staff".to_string(),
                "Own branch P&L".to_string(),
            ],
            status: JobStatus::Draft,
            posted_on: date(2025, 10, 1),
            closing_on: None,
        },
    ]
}

fn snapshot(job_id: &str, title: &str, department: &str) -> JobSnapshot {
    JobSnapshot {
        job_id: JobId(job_id.to_string()),
        title: title.to_string(),
        department: department.to_string(),
    }
}

fn timeline(entries: &[(ApplicationStatus, NaiveDate, &str)]) -> Vec<TimelineEntry> {
    entries
        .iter()
        .map(|(status, date, description)| TimelineEntry {
            status: *status,
            date: *date,
            description: (*description).to_string(),
        })
        .collect()
}

pub fn seed_applications() -> Vec<Application> {
    vec![
        Application {
            id: ApplicationId("app-1".to_string()),
            job: snapshot("job-1", "Retail Sales Associate", "Sales"),
            candidate: Candidate {
                name: "Somchai Jaidee".to_string(),
                email: "somchai@example.com".to_string(),
                phone: "081-234-5678".to_string(),
            },
            cover_letter: "I enjoy helping customers and know the product line well.".to_string(),
            resume: "somchai-jaidee-resume.pdf".to_string(),
            education: Education {
                degree: "High School Diploma".to_string(),
                institution: "Bangkok Christian College".to_string(),
                gpa: None,
            },
            experience: Experience {
                position: "Cashier".to_string(),
                company: "QuickMart".to_string(),
                duration: "1 year".to_string(),
            },
            skills: vec!["Customer service".to_string(), "POS".to_string()],
            pre_screening_score: Some(76),
            status: ApplicationStatus::Submitted,
            submitted_on: date(2025, 9, 20),
            notes: Vec::new(),
            timeline: timeline(&[(
                ApplicationStatus::Submitted,
                date(2025, 9, 20),
                "Application received",
            )]),
            evaluation: None,
        },
        Application {
            id: ApplicationId("app-2".to_string()),
            job: snapshot("job-1", "Retail Sales Associate", "Sales"),
            candidate: Candidate {
                name: "Malee Thongchai".to_string(),
                email: "malee.t@example.com".to_string(),
                phone: "082-345-6789".to_string(),
            },
            cover_letter: "Three years on a busy sales floor.".to_string(),
            resume: "malee-thongchai-resume.pdf".to_string(),
            education: Education {
                degree: "Associate Degree, Business".to_string(),
                institution: "Dusit Commercial College".to_string(),
                gpa: Some("3.1".to_string()),
            },
            experience: Experience {
                position: "Sales Associate".to_string(),
                company: "Central Department Store".to_string(),
                duration: "3 years".to_string(),
            },
            skills: vec!["Upselling".to_string(), "Inventory".to_string()],
            pre_screening_score: Some(84),
            status: ApplicationStatus::Screening,
            submitted_on: date(2025, 9, 18),
            notes: vec![Note {
                id: "note-1".to_string(),
                author: "HR".to_string(),
                content: "References confirmed at Central.".to_string(),
                created_on: date(2025, 9, 22),
            }],
            timeline: timeline(&[
                (
                    ApplicationStatus::Submitted,
                    date(2025, 9, 18),
                    "Application received",
                ),
                (
                    ApplicationStatus::Screening,
                    date(2025, 9, 22),
                    "HR reviewing documents",
                ),
            ]),
            evaluation: None,
        },
        Application {
            id: ApplicationId("app-3".to_string()),
            job: snapshot("job-2", "Senior Software Engineer", "Engineering"),
            candidate: Candidate {
                name: "Kittipong Wong".to_string(),
                email: "kittipong.w@example.com".to_string(),
                phone: "083-456-7890".to_string(),
            },
            cover_letter: "Seven years shipping backend services in fintech.".to_string(),
            resume: "kittipong-wong-resume.pdf".to_string(),
            education: Education {
                degree: "BSc Computer Science".to_string(),
                institution: "Chulalongkorn University".to_string(),
                gpa: Some("3.6".to_string()),
            },
            experience: Experience {
                position: "Senior Engineer".to_string(),
                company: "FinPay".to_string(),
                duration: "4 years".to_string(),
            },
            skills: vec![
                "Distributed systems".to_string(),
                "PostgreSQL".to_string(),
                "Kubernetes".to_string(),
            ],
            pre_screening_score: Some(93),
            status: ApplicationStatus::Interview,
            submitted_on: date(2025, 9, 12),
            notes: Vec::new(),
            timeline: timeline(&[
                (
                    ApplicationStatus::Submitted,
                    date(2025, 9, 12),
                    "Application received",
                ),
                (
                    ApplicationStatus::Screening,
                    date(2025, 9, 15),
                    "HR reviewing documents",
                ),
                (
                    ApplicationStatus::Interview,
                    date(2025, 9, 24),
                    "On-site interview scheduled",
                ),
            ]),
            evaluation: Some(Evaluation {
                evaluator: "Engineering Manager".to_string(),
                scores: EvaluationScores {
                    technical: 5,
                    communication: 5,
                    problem_solving: 4,
                    culture_fit: 5,
                    extended: Default::default(),
                },
                overall_score: 4.75,
                comments: "Deep systems knowledge, communicates clearly.".to_string(),
                recommendation: HiringRecommendation::Recommend,
                evaluated_on: date(2025, 9, 26),
            }),
        },
        Application {
            id: ApplicationId("app-4".to_string()),
            job: snapshot("job-3", "Marketing Specialist", "Marketing"),
            candidate: Candidate {
                name: "Pranee Suksawat".to_string(),
                email: "pranee.s@example.com".to_string(),
                phone: "084-567-8901".to_string(),
            },
            cover_letter: "Regional campaign experience across the north.".to_string(),
            resume: "pranee-suksawat-resume.pdf".to_string(),
            education: Education {
                degree: "BA Communications".to_string(),
                institution: "Chiang Mai University".to_string(),
                gpa: Some("3.4".to_string()),
            },
            experience: Experience {
                position: "Marketing Executive".to_string(),
                company: "Lanna Media".to_string(),
                duration: "3 years".to_string(),
            },
            skills: vec!["Campaign planning".to_string(), "Analytics".to_string()],
            pre_screening_score: Some(88),
            status: ApplicationStatus::Offer,
            submitted_on: date(2025, 9, 14),
            notes: Vec::new(),
            timeline: timeline(&[
                (
                    ApplicationStatus::Submitted,
                    date(2025, 9, 14),
                    "Application received",
                ),
                (
                    ApplicationStatus::Screening,
                    date(2025, 9, 16),
                    "HR reviewing documents",
                ),
                (
                    ApplicationStatus::Interview,
                    date(2025, 9, 23),
                    "Interview completed",
                ),
                (
                    ApplicationStatus::Offer,
                    date(2025, 9, 30),
                    "Offer extended",
                ),
            ]),
            evaluation: Some(Evaluation {
                evaluator: "Marketing Director".to_string(),
                scores: EvaluationScores {
                    technical: 4,
                    communication: 5,
                    problem_solving: 4,
                    culture_fit: 4,
                    extended: Default::default(),
                },
                overall_score: 4.25,
                comments: "Strong channel instincts.".to_string(),
                recommendation: HiringRecommendation::Recommend,
                evaluated_on: date(2025, 9, 25),
            }),
        },
        Application {
            id: ApplicationId("app-5".to_string()),
            job: snapshot("job-2", "Senior Software Engineer", "Engineering"),
            candidate: Candidate {
                name: "Anan Prasert".to_string(),
                email: "anan.p@example.com".to_string(),
                phone: "085-678-9012".to_string(),
            },
            cover_letter: "Looking to move into a senior role.".to_string(),
            resume: "anan-prasert-resume.pdf".to_string(),
            education: Education {
                degree: "BEng Software Engineering".to_string(),
                institution: "KMUTT".to_string(),
                gpa: Some("2.9".to_string()),
            },
            experience: Experience {
                position: "Developer".to_string(),
                company: "Siam Web Co.".to_string(),
                duration: "2 years".to_string(),
            },
            skills: vec!["PHP".to_string(), "MySQL".to_string()],
            pre_screening_score: Some(61),
            status: ApplicationStatus::Rejected,
            submitted_on: date(2025, 9, 8),
            notes: Vec::new(),
            timeline: timeline(&[
                (
                    ApplicationStatus::Submitted,
                    date(2025, 9, 8),
                    "Application received",
                ),
                (
                    ApplicationStatus::Screening,
                    date(2025, 9, 11),
                    "HR reviewing documents",
                ),
                (
                    ApplicationStatus::Rejected,
                    date(2025, 9, 17),
                    "Experience below the senior bar",
                ),
            ]),
            evaluation: Some(Evaluation {
                evaluator: "Engineering Manager".to_string(),
                scores: EvaluationScores {
                    technical: 2,
                    communication: 3,
                    problem_solving: 2,
                    culture_fit: 2,
                    extended: Default::default(),
                },
                overall_score: 2.25,
                comments: "Not yet at the level this opening needs.".to_string(),
                recommendation: HiringRecommendation::NotRecommend,
                evaluated_on: date(2025, 9, 16),
            }),
        },
        Application {
            id: ApplicationId("app-6".to_string()),
            job: snapshot("job-1", "Retail Sales Associate", "Sales"),
            candidate: Candidate {
                name: "Siriporn Kaewmala".to_string(),
                email: "siriporn.k@example.com".to_string(),
                phone: "086-789-0123".to_string(),
            },
            cover_letter: "Returning to retail after a year abroad.".to_string(),
            resume: "siriporn-kaewmala-resume.pdf".to_string(),
            education: Education {
                degree: "BBA".to_string(),
                institution: "Ramkhamhaeng University".to_string(),
                gpa: Some("3.2".to_string()),
            },
            experience: Experience {
                position: "Shift Lead".to_string(),
                company: "MegaStore".to_string(),
                duration: "4 years".to_string(),
            },
            skills: vec!["Team leadership".to_string(), "Stock control".to_string()],
            pre_screening_score: Some(91),
            status: ApplicationStatus::Hired,
            submitted_on: date(2025, 8, 25),
            notes: Vec::new(),
            timeline: timeline(&[
                (
                    ApplicationStatus::Submitted,
                    date(2025, 8, 25),
                    "Application received",
                ),
                (
                    ApplicationStatus::Screening,
                    date(2025, 8, 27),
                    "HR reviewing documents",
                ),
                (
                    ApplicationStatus::Interview,
                    date(2025, 9, 2),
                    "Interview completed",
                ),
                (
                    ApplicationStatus::Offer,
                    date(2025, 9, 8),
                    "Offer extended",
                ),
                (
                    ApplicationStatus::Hired,
                    date(2025, 9, 15),
                    "Offer accepted, start date confirmed",
                ),
            ]),
            evaluation: Some(Evaluation {
                evaluator: "Store Manager".to_string(),
                scores: EvaluationScores {
                    technical: 4,
                    communication: 5,
                    problem_solving: 4,
                    culture_fit: 5,
                    extended: Default::default(),
                },
                overall_score: 4.5,
                comments: "Ready to lead a shift from day one.".to_string(),
                recommendation: HiringRecommendation::Recommend,
                evaluated_on: date(2025, 9, 4),
            }),
        },
    ]
}

/// Accounts with their mock-mode passwords.
pub fn seed_users() -> Vec<(User, String)> {
    vec![
        (
            User {
                id: UserId("user-1".to_string()),
                email: "somchai@example.com".to_string(),
                name: "Somchai Jaidee".to_string(),
                phone: "081-234-5678".to_string(),
                role: Role::Candidate,
                department: None,
                position: None,
            },
            "candidate-password".to_string(),
        ),
        (
            User {
                id: UserId("user-2".to_string()),
                email: "hr@example.com".to_string(),
                name: "Nittaya Boonmee".to_string(),
                phone: "02-123-4567".to_string(),
                role: Role::Hr,
                department: Some("People".to_string()),
                position: Some("HR Officer".to_string()),
            },
            "hr-password".to_string(),
        ),
        (
            User {
                id: UserId("user-3".to_string()),
                email: "hm@example.com".to_string(),
                name: "Prawit Chaiyasit".to_string(),
                phone: "02-765-4321".to_string(),
                role: Role::HiringManager,
                department: Some("Engineering".to_string()),
                position: Some("Engineering Manager".to_string()),
            },
            "hm-password".to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_applications_reference_seeded_jobs() {
        let job_ids: HashSet<_> = seed_jobs().into_iter().map(|job| job.id).collect();
        for application in seed_applications() {
            assert!(
                job_ids.contains(&application.job.job_id),
                "{} references a missing job",
                application.id.0
            );
        }
    }

    #[test]
    fn seeded_timelines_are_consistent() {
        for application in seed_applications() {
            assert!(
                application.timeline_consistent(),
                "{} has a drifted timeline",
                application.id.0
            );
        }
    }

    #[test]
    fn seeds_cover_every_lifecycle_stage() {
        let statuses: HashSet<_> = seed_applications()
            .into_iter()
            .map(|application| application.status)
            .collect();
        for status in [
            ApplicationStatus::Submitted,
            ApplicationStatus::Screening,
            ApplicationStatus::Interview,
            ApplicationStatus::Offer,
            ApplicationStatus::Rejected,
            ApplicationStatus::Hired,
        ] {
            assert!(statuses.contains(&status), "missing a {status:?} seed");
        }
    }
}
