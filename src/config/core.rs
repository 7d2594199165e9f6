use serde::{Deserialize, Serialize};

use crate::rank::Metric;

pub const COMMITS_MEDIAN: f64 = 250.0;
pub const ALL_COMMITS_MEDIAN: f64 = 1000.0;
pub const COMMITS_WEIGHT: f64 = 5000.0;
pub const PULL_REQUESTS_MEDIAN: f64 = 50.0;
pub const PULL_REQUESTS_WEIGHT: f64 = 500_000.0;
pub const ISSUES_MEDIAN: f64 = 25.0;
pub const ISSUES_WEIGHT: f64 = 50_000.0;
pub const REVIEWS_MEDIAN: f64 = 2.0;
pub const REVIEWS_WEIGHT: f64 = 500_000.0;
pub const STARS_MEDIAN: f64 = 50.0;
pub const STARS_WEIGHT: f64 = 5000.0;
pub const FOLLOWERS_MEDIAN: f64 = 10.0;
pub const FOLLOWERS_WEIGHT: f64 = 500_000.0;

/// Baseline used for a metric when nothing overrides it.
pub fn default_median(metric: Metric, include_all_commits: bool) -> f64 {
    match metric {
        Metric::Commits if include_all_commits => ALL_COMMITS_MEDIAN,
        Metric::Commits => COMMITS_MEDIAN,
        Metric::PullRequests => PULL_REQUESTS_MEDIAN,
        Metric::Issues => ISSUES_MEDIAN,
        Metric::Reviews => REVIEWS_MEDIAN,
        Metric::Stars => STARS_MEDIAN,
        Metric::Followers => FOLLOWERS_MEDIAN,
    }
}

pub fn default_weight(metric: Metric) -> f64 {
    match metric {
        Metric::Commits => COMMITS_WEIGHT,
        Metric::PullRequests => PULL_REQUESTS_WEIGHT,
        Metric::Issues => ISSUES_WEIGHT,
        Metric::Reviews => REVIEWS_WEIGHT,
        Metric::Stars => STARS_WEIGHT,
        Metric::Followers => FOLLOWERS_WEIGHT,
    }
}

/// Overrides for a single metric. Unset fields keep the built-in value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    /// Baseline count that scores 0.5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,

    /// Baseline used when all commits are included (commits only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_commits_median: Option<f64>,

    /// Relative importance of the metric
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Root configuration structure, read from `.rankcalc.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankConfig {
    #[serde(default)]
    pub commits: MetricConfig,

    #[serde(default)]
    pub pull_requests: MetricConfig,

    #[serde(default)]
    pub issues: MetricConfig,

    #[serde(default)]
    pub reviews: MetricConfig,

    #[serde(default)]
    pub stars: MetricConfig,

    #[serde(default)]
    pub followers: MetricConfig,
}

impl RankConfig {
    pub fn metric(&self, metric: Metric) -> &MetricConfig {
        match metric {
            Metric::Commits => &self.commits,
            Metric::PullRequests => &self.pull_requests,
            Metric::Issues => &self.issues,
            Metric::Reviews => &self.reviews,
            Metric::Stars => &self.stars,
            Metric::Followers => &self.followers,
        }
    }

    /// Effective baseline for a metric.
    ///
    /// The all-commits baseline only exists for commits; other metrics ignore
    /// `include_all_commits`.
    pub fn median(&self, metric: Metric, include_all_commits: bool) -> f64 {
        let overrides = self.metric(metric);
        let configured = match metric {
            Metric::Commits if include_all_commits => overrides.all_commits_median,
            _ => overrides.median,
        };
        configured.unwrap_or_else(|| default_median(metric, include_all_commits))
    }

    /// Effective weight for a metric.
    pub fn weight(&self, metric: Metric) -> f64 {
        self.metric(metric)
            .weight
            .unwrap_or_else(|| default_weight(metric))
    }

    pub fn total_weight(&self) -> f64 {
        Metric::ALL.iter().map(|m| self.weight(*m)).sum()
    }
}

/// Template written by `rankcalc init`. Every value matches the defaults.
pub fn default_config_toml() -> &'static str {
    r#"# rankcalc configuration
#
# Each metric is divided by its median and squashed into [0, 1).
# The weighted average of those scores decides the grade.

[commits]
median = 250
# used instead of median when all commits are counted
all_commits_median = 1000
weight = 5000

[pull_requests]
median = 50
weight = 500000

[issues]
median = 25
weight = 50000

[reviews]
median = 2
weight = 500000

[stars]
median = 50
weight = 5000

[followers]
median = 10
weight = 500000
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_table() {
        let config = RankConfig::default();
        assert_eq!(config.median(Metric::Commits, false), 250.0);
        assert_eq!(config.median(Metric::Commits, true), 1000.0);
        assert_eq!(config.median(Metric::PullRequests, true), 50.0);
        assert_eq!(config.median(Metric::Issues, false), 25.0);
        assert_eq!(config.median(Metric::Reviews, false), 2.0);
        assert_eq!(config.median(Metric::Stars, false), 50.0);
        assert_eq!(config.median(Metric::Followers, false), 10.0);
        assert_eq!(config.total_weight(), 1_560_000.0);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = RankConfig {
            commits: MetricConfig {
                median: Some(100.0),
                all_commits_median: Some(400.0),
                weight: None,
            },
            stars: MetricConfig {
                weight: Some(10.0),
                ..MetricConfig::default()
            },
            ..RankConfig::default()
        };
        assert_eq!(config.median(Metric::Commits, false), 100.0);
        assert_eq!(config.median(Metric::Commits, true), 400.0);
        assert_eq!(config.weight(Metric::Commits), COMMITS_WEIGHT);
        assert_eq!(config.weight(Metric::Stars), 10.0);
        assert_eq!(config.median(Metric::Stars, false), STARS_MEDIAN);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: RankConfig = toml::from_str(default_config_toml()).unwrap();
        for metric in Metric::ALL {
            for all in [false, true] {
                assert_eq!(
                    parsed.median(metric, all),
                    RankConfig::default().median(metric, all)
                );
            }
            assert_eq!(parsed.weight(metric), RankConfig::default().weight(metric));
        }
    }
}
