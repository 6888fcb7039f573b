use std::sync::Arc;

use ats_core::datasource::{fixtures, DataSource};
use ats_core::error::AppError;
use ats_core::hiring::applications::domain::{
    ApplicationStatus, ApplicationSubmission, Candidate, Education, EvaluationDraft,
    EvaluationScores, Experience, HiringRecommendation,
};
use ats_core::hiring::applications::{forward_options, ApplicationService};
use ats_core::hiring::jobs::domain::JobId;
use ats_core::notify::mailer::LoggedMailer;
use ats_core::notify::Notifier;
use ats_core::reports;
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the evaluation portion of the demo.
    #[arg(long)]
    pub(crate) skip_evaluation: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

fn render_error(error: impl std::fmt::Display) -> AppError {
    AppError::Io(std::io::Error::other(error.to_string()))
}

/// Prints pipeline statistics computed over the seeded fixture data.
pub(crate) fn run_pipeline_report(args: ReportArgs) -> Result<(), AppError> {
    let applications = fixtures::seed_applications();
    let stats = reports::dashboard(&applications);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).map_err(render_error)?
        );
        return Ok(());
    }

    println!("Hiring pipeline ({} applications)", stats.total_applications);
    println!();
    println!("By status:");
    for (status, count) in &stats.by_status {
        println!("  {status:<12} {count}");
    }
    println!();
    println!("By department:");
    for rollup in &stats.by_department {
        println!(
            "  {:<14} {} applications, {} hired ({}%)",
            rollup.department, rollup.total, rollup.hired, rollup.hire_rate_pct
        );
    }
    println!();
    println!(
        "Conversion: {}% of offers accepted, {}% hired overall",
        stats.conversion.offer_to_hire_pct, stats.conversion.overall_hire_pct
    );
    println!(
        "Evaluations: {} done, {} pending ({}% coverage)",
        stats.evaluations.evaluated, stats.evaluations.pending, stats.evaluations.evaluation_rate_pct
    );
    if let Some(average) = stats.evaluations.average_score {
        println!("Average overall score: {average}");
    }
    let grades = stats.pre_screening_grades;
    println!(
        "Pre-screening grades: {} A, {} B, {} C, {} D",
        grades.a, grades.b, grades.c, grades.d
    );
    Ok(())
}

/// Walks one application through intake, review, and evaluation against the
/// seeded in-memory data source, printing each step.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let source = DataSource::mock();
    let notifier = Arc::new(Notifier::new(Arc::new(LoggedMailer::new(
        "ATS Demo <noreply@company.com>".to_string(),
    ))));
    let service = ApplicationService::new(source.applications.clone(), source.jobs, notifier);

    println!("== Intake ==");
    let application = service
        .submit(demo_submission())
        .await
        .map_err(render_error)?;
    println!(
        "Submitted {} for '{}' ({})",
        application.id.0, application.job.title, application.candidate.name
    );

    println!();
    println!("== Review ==");
    let mut current = application;
    for status in [ApplicationStatus::Screening, ApplicationStatus::Interview] {
        let outcome = service
            .transition(&current.id, status, None)
            .await
            .map_err(render_error)?;
        let options: Vec<_> = forward_options(outcome.application.status)
            .iter()
            .map(|s| s.label())
            .collect();
        println!(
            "-> {} (notified: {}, next: {})",
            outcome.application.status.label(),
            outcome.notified,
            options.join(", ")
        );
        current = outcome.application;
    }

    if !args.skip_evaluation {
        println!();
        println!("== Evaluation ==");
        let evaluated = service
            .add_evaluation(
                &current.id,
                EvaluationDraft {
                    evaluator: "Engineering Manager".to_string(),
                    scores: EvaluationScores {
                        technical: 5,
                        communication: 5,
                        problem_solving: 4,
                        culture_fit: 5,
                        extended: Default::default(),
                    },
                    comments: "Excellent systems depth.".to_string(),
                    recommendation: HiringRecommendation::Recommend,
                },
            )
            .await
            .map_err(render_error)?;
        if let Some(evaluation) = &evaluated.evaluation {
            println!(
                "Overall score {} ({:?} by {})",
                evaluation.overall_score, evaluation.recommendation, evaluation.evaluator
            );
        }
    }

    println!();
    println!("== Decision ==");
    let outcome = service
        .transition(&current.id, ApplicationStatus::Offer, None)
        .await
        .map_err(render_error)?;
    println!(
        "-> {} (timeline entries: {})",
        outcome.application.status.label(),
        outcome.application.timeline.len()
    );
    Ok(())
}

fn demo_submission() -> ApplicationSubmission {
    ApplicationSubmission {
        job_id: JobId("job-2".to_string()),
        candidate: Candidate {
            name: "Demo Candidate".to_string(),
            email: "demo.candidate@example.com".to_string(),
            phone: "080-000-1234".to_string(),
        },
        cover_letter: "Walking through the pipeline end to end.".to_string(),
        resume: "demo-candidate-resume.pdf".to_string(),
        education: Education {
            degree: "BSc Computer Science".to_string(),
            institution: "Demo University".to_string(),
            gpa: Some("3.5".to_string()),
        },
        experience: Experience {
            position: "Backend Engineer".to_string(),
            company: "Example Co.".to_string(),
            duration: "6 years".to_string(),
        },
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        pre_screening_score: Some(92),
    }
}
