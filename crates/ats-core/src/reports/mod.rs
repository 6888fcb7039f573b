//! Dashboard aggregates. Every function here is a pure fold over a snapshot
//! of the applications list; persistence and authorization stay in the
//! services that call them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::hiring::applications::domain::{Application, ApplicationStatus, HiringRecommendation};

/// Everything the dashboard renders in one payload. Also the wire shape the
/// remote backend's stats endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_applications: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_department: Vec<DepartmentRollup>,
    pub conversion: ConversionRates,
    pub evaluations: EvaluationStats,
    pub pre_screening_grades: GradeBuckets,
}

/// Hire-rate percentages, one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRates {
    /// Hired as a share of applications that reached an offer.
    pub offer_to_hire_pct: f64,
    /// Hired as a share of all applications.
    pub overall_hire_pct: f64,
}

/// Per-department totals with the department's own hire rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRollup {
    pub department: String,
    pub total: usize,
    pub hired: usize,
    pub hire_rate_pct: f64,
}

/// Evaluation coverage and score shape, two decimal places on scores.
/// `pending` counts interview-stage applications still awaiting a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationStats {
    pub evaluated: usize,
    pub pending: usize,
    pub evaluation_rate_pct: f64,
    pub average_score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub score_buckets: ScoreBuckets,
    pub by_recommendation: BTreeMap<String, usize>,
}

/// Overall-score histogram: excellent >= 4.5, good >= 3.5, average >= 2.5,
/// poor below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBuckets {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub poor: usize,
}

/// Pre-screening letter-grade histogram (A >= 90, B >= 80, C >= 70, D below).
/// Applications without an external score are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBuckets {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn pct(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

pub fn dashboard(applications: &[Application]) -> DashboardStats {
    DashboardStats {
        total_applications: applications.len(),
        by_status: status_distribution(applications),
        by_department: department_rollup(applications),
        conversion: conversion_rates(applications),
        evaluations: evaluation_stats(applications),
        pre_screening_grades: grade_distribution(applications),
    }
}

pub fn grade_distribution(applications: &[Application]) -> GradeBuckets {
    let mut buckets = GradeBuckets::default();
    for grade in applications.iter().filter_map(|a| a.pre_screening_grade()) {
        match grade {
            'A' => buckets.a += 1,
            'B' => buckets.b += 1,
            'C' => buckets.c += 1,
            _ => buckets.d += 1,
        }
    }
    buckets
}

pub fn status_distribution(applications: &[Application]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for application in applications {
        *counts
            .entry(application.status.label().to_string())
            .or_insert(0) += 1;
    }
    counts
}

pub fn conversion_rates(applications: &[Application]) -> ConversionRates {
    let hired = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Hired)
        .count();
    // everyone hired passed through an offer, even when the offer stage was
    // recorded out-of-band
    let reached_offer = applications
        .iter()
        .filter(|a| matches!(a.status, ApplicationStatus::Offer | ApplicationStatus::Hired))
        .count();

    ConversionRates {
        offer_to_hire_pct: pct(hired, reached_offer),
        overall_hire_pct: pct(hired, applications.len()),
    }
}

pub fn department_rollup(applications: &[Application]) -> Vec<DepartmentRollup> {
    let mut totals: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for application in applications {
        let entry = totals.entry(&application.job.department).or_insert((0, 0));
        entry.0 += 1;
        if application.status == ApplicationStatus::Hired {
            entry.1 += 1;
        }
    }
    totals
        .into_iter()
        .map(|(department, (total, hired))| DepartmentRollup {
            department: department.to_string(),
            total,
            hired,
            hire_rate_pct: pct(hired, total),
        })
        .collect()
}

pub fn evaluation_stats(applications: &[Application]) -> EvaluationStats {
    let scores: Vec<f64> = applications
        .iter()
        .filter_map(|a| a.evaluation.as_ref())
        .map(|e| e.overall_score)
        .collect();
    let evaluated = scores.len();
    let pending = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Interview && a.evaluation.is_none())
        .count();

    let average_score = (!scores.is_empty())
        .then(|| round2(scores.iter().sum::<f64>() / scores.len() as f64));
    let min_score = scores.iter().copied().reduce(f64::min).map(round2);
    let max_score = scores.iter().copied().reduce(f64::max).map(round2);

    let mut buckets = ScoreBuckets::default();
    for score in &scores {
        match score {
            s if *s >= 4.5 => buckets.excellent += 1,
            s if *s >= 3.5 => buckets.good += 1,
            s if *s >= 2.5 => buckets.average += 1,
            _ => buckets.poor += 1,
        }
    }

    let mut by_recommendation = BTreeMap::new();
    for evaluation in applications.iter().filter_map(|a| a.evaluation.as_ref()) {
        let label = match evaluation.recommendation {
            HiringRecommendation::Recommend => "recommend",
            HiringRecommendation::NotRecommend => "not-recommend",
            HiringRecommendation::RequestInterview => "request-interview",
        };
        *by_recommendation.entry(label.to_string()).or_insert(0) += 1;
    }

    EvaluationStats {
        evaluated,
        pending,
        evaluation_rate_pct: pct(evaluated, applications.len()),
        average_score,
        min_score,
        max_score,
        score_buckets: buckets,
        by_recommendation,
    }
}
