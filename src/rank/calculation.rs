//! Weighted aggregation of metric scores into a rank and grade.

use super::level::Level;
use super::types::{Metric, MetricScore, RankBreakdown, RankInput, RankResult};
use crate::config::RankConfig;

/// Median and weight for one metric, resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MetricParams {
    metric: Metric,
    median: f64,
    all_commits_median: f64,
    weight: f64,
}

impl MetricParams {
    fn median_for(&self, include_all_commits: bool) -> f64 {
        if include_all_commits {
            self.all_commits_median
        } else {
            self.median
        }
    }

    fn score(&self, input: &RankInput) -> MetricScore {
        let value = input.value(self.metric);
        let baseline = self.median_for(input.include_all_commits);
        let ratio = value / baseline;
        // both curves tend to 1; evaluating them at +inf gives NaN
        let score = if ratio == f64::INFINITY {
            1.0
        } else {
            self.metric.distribution().cdf(ratio)
        };
        MetricScore {
            metric: self.metric,
            value,
            baseline,
            ratio,
            score,
            weight: self.weight,
            contribution: self.weight * score,
        }
    }
}

/// Computes ranks from a fixed table of medians and weights.
///
/// The calculator is immutable once built and can be shared freely between
/// threads.
#[derive(Debug, Clone, PartialEq)]
pub struct RankCalculator {
    params: [MetricParams; 6],
    total_weight: f64,
}

impl RankCalculator {
    /// Build a calculator from a configuration.
    ///
    /// The configuration is not validated here; see [`RankConfig::validate`].
    pub fn new(config: RankConfig) -> Self {
        let params = Metric::ALL.map(|metric| MetricParams {
            metric,
            median: config.median(metric, false),
            all_commits_median: config.median(metric, true),
            weight: config.weight(metric),
        });
        let total_weight = params.iter().map(|p| p.weight).sum();
        Self {
            params,
            total_weight,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Raw rank in `(0, 1]` for non-negative input; lower is better.
    pub fn rank(&self, input: &RankInput) -> f64 {
        let weighted_sum: f64 = self
            .params
            .iter()
            .map(|p| p.score(input).contribution)
            .sum();
        1.0 - weighted_sum / self.total_weight
    }

    pub fn calculate(&self, input: &RankInput) -> RankResult {
        let rank = self.rank(input);
        let level = Level::from_rank(rank);
        log::debug!("Computed rank {:.6} -> {}", rank, level);
        RankResult {
            level,
            percentile: percentile(input),
        }
    }

    /// Rank together with every metric's contribution to it.
    pub fn explain(&self, input: &RankInput) -> RankBreakdown {
        let metrics: Vec<MetricScore> = self.params.iter().map(|p| p.score(input)).collect();
        let weighted_sum: f64 = metrics.iter().map(|m| m.contribution).sum();
        let rank = 1.0 - weighted_sum / self.total_weight;
        RankBreakdown {
            rank,
            level: Level::from_rank(rank),
            percentile: percentile(input),
            weighted_sum,
            total_weight: self.total_weight,
            metrics,
        }
    }
}

impl Default for RankCalculator {
    fn default() -> Self {
        Self::new(RankConfig::default())
    }
}

/// Reported percentile: `include_all_commits` as 0 or 1, times 10.
///
/// The value ignores the computed rank entirely. Consumers already depend on
/// it, so it is kept as-is rather than replaced with `rank * 100`.
fn percentile(input: &RankInput) -> f64 {
    f64::from(u8::from(input.include_all_commits)) * 10.0
}

/// Rank a user with the built-in medians and weights.
pub fn calculate_rank(input: &RankInput) -> RankResult {
    RankCalculator::default().calculate(input)
}
