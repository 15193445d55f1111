use serde::Serialize;
use std::collections::HashMap;

use super::domain::SubmissionRecord;
use crate::scoring::{round_to_cents, Rating};

pub const TOP_ISSUE_LIMIT: usize = 5;

/// Aggregate statistics over every stored submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub total_products: usize,
    pub average_score: f64,
    pub ratings: RatingCounts,
    pub top_issues: Vec<IssueCount>,
    pub distribution: ScoreDistribution,
    pub score_range: ScoreRangeCounts,
}

/// Submissions per letter grade, serialized in A-to-F order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingCounts {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "B")]
    pub b: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "D")]
    pub d: usize,
    #[serde(rename = "F")]
    pub f: usize,
}

impl RatingCounts {
    pub fn get(&self, rating: Rating) -> usize {
        match rating {
            Rating::A => self.a,
            Rating::B => self.b,
            Rating::C => self.c,
            Rating::D => self.d,
            Rating::F => self.f,
        }
    }

    fn record(&mut self, rating: Rating) {
        let slot = match rating {
            Rating::A => &mut self.a,
            Rating::B => &mut self.b,
            Rating::C => &mut self.c,
            Rating::D => &mut self.d,
            Rating::F => &mut self.f,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueCount {
    pub issue: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreDistribution {
    pub min_score: f64,
    pub max_score: f64,
    pub median_score: f64,
    pub std_dev: f64,
}

/// Band counts over the raw scores. The thresholds match the letter grades but
/// are evaluated independently of the stored rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreRangeCounts {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
    pub failing: usize,
}

impl ScoreRangeCounts {
    fn record(&mut self, score: f64) {
        if score >= 85.0 {
            self.excellent += 1;
        } else if score >= 70.0 {
            self.good += 1;
        } else if score >= 55.0 {
            self.fair += 1;
        } else if score >= 40.0 {
            self.poor += 1;
        } else {
            self.failing += 1;
        }
    }
}

/// Builds the summary report. An empty slice yields an all-zero summary.
pub fn summarize(records: &[SubmissionRecord]) -> ScoreSummary {
    let mut ratings = RatingCounts::default();
    let mut score_range = ScoreRangeCounts::default();
    for record in records {
        ratings.record(record.rating);
        score_range.record(record.score);
    }

    let scores: Vec<f64> = records.iter().map(|record| record.score).collect();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        round_to_cents(mean(&scores))
    };

    ScoreSummary {
        total_products: records.len(),
        average_score,
        ratings,
        top_issues: top_issues(records, TOP_ISSUE_LIMIT),
        distribution: distribution(&scores),
        score_range,
    }
}

/// Most frequent issues, highest count first. Ties keep first-appearance order.
fn top_issues(records: &[SubmissionRecord], limit: usize) -> Vec<IssueCount> {
    let mut counts: Vec<IssueCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for issue in records.iter().flat_map(|record| record.issues.iter()) {
        match positions.get(issue.as_str()) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(issue.as_str(), counts.len());
                counts.push(IssueCount {
                    issue: issue.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|left, right| right.count.cmp(&left.count));
    counts.truncate(limit);
    counts
}

fn distribution(scores: &[f64]) -> ScoreDistribution {
    if scores.is_empty() {
        return ScoreDistribution::default();
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    let std_dev = if sorted.len() > 1 {
        round_to_cents(sample_std_dev(&sorted))
    } else {
        0.0
    };

    ScoreDistribution {
        min_score: sorted[0],
        max_score: sorted[sorted.len() - 1],
        median_score: median(&sorted),
        std_dev,
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Standard deviation with Bessel's correction (n - 1 denominator).
fn sample_std_dev(values: &[f64]) -> f64 {
    let avg = mean(values);
    let squared: f64 = values.iter().map(|value| (value - avg).powi(2)).sum();
    (squared / (values.len() - 1) as f64).sqrt()
}
