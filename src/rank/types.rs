//! Input and output records for the rank calculation.

use super::distribution::Distribution;
use super::level::Level;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated activity statistics for a single user.
///
/// Field names serialize in camelCase; the short names used by older
/// callers (`all_commits`, `prs`, `repos`) are accepted as aliases.
/// Missing fields default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankInput {
    /// Whether commits were counted over the full history rather than the
    /// recent window. Switches the commits baseline and the reported
    /// percentile.
    #[serde(alias = "all_commits", alias = "include_all_commits")]
    pub include_all_commits: bool,
    pub commits: f64,
    #[serde(alias = "prs", alias = "pull_requests")]
    pub pull_requests: f64,
    pub issues: f64,
    pub reviews: f64,
    /// Accepted for compatibility; does not contribute to the rank.
    #[serde(alias = "repos")]
    pub repositories: f64,
    pub stars: f64,
    pub followers: f64,
}

impl RankInput {
    /// Raw count for a scored metric.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Commits => self.commits,
            Metric::PullRequests => self.pull_requests,
            Metric::Issues => self.issues,
            Metric::Reviews => self.reviews,
            Metric::Stars => self.stars,
            Metric::Followers => self.followers,
        }
    }
}

/// Grade and percentile reported for a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    pub level: Level,
    /// `10` when all commits were included, `0` otherwise.
    ///
    /// This value does not depend on the computed rank. It is reported as-is
    /// for compatibility with existing consumers.
    pub percentile: f64,
}

/// The six metrics that contribute to the rank, in aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Commits,
    PullRequests,
    Issues,
    Reviews,
    Stars,
    Followers,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Commits,
        Metric::PullRequests,
        Metric::Issues,
        Metric::Reviews,
        Metric::Stars,
        Metric::Followers,
    ];

    pub fn distribution(&self) -> Distribution {
        match self {
            Metric::Stars | Metric::Followers => Distribution::LogNormal,
            _ => Distribution::Exponential,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Commits => "commits",
            Metric::PullRequests => "pull_requests",
            Metric::Issues => "issues",
            Metric::Reviews => "reviews",
            Metric::Stars => "stars",
            Metric::Followers => "followers",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single metric contributed to the rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric: Metric,
    pub value: f64,
    pub baseline: f64,
    pub ratio: f64,
    /// Distribution output in `[0, 1)`.
    pub score: f64,
    pub weight: f64,
    /// `weight * score`
    pub contribution: f64,
}

/// Full account of a rank calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankBreakdown {
    /// `1 - weighted_sum / total_weight`; lower is better.
    pub rank: f64,
    pub level: Level,
    pub percentile: f64,
    pub weighted_sum: f64,
    pub total_weight: f64,
    pub metrics: Vec<MetricScore>,
}

impl RankBreakdown {
    pub fn result(&self) -> RankResult {
        RankResult {
            level: self.level,
            percentile: self.percentile,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<&MetricScore> {
        self.metrics.iter().find(|score| score.metric == metric)
    }
}
