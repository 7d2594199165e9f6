//! Validation of rank configuration.
//!
//! All problems are collected before reporting so a user sees every invalid
//! value in one run.

use super::core::RankConfig;
use crate::errors::{RankError, Result};
use crate::rank::Metric;

// Subnormal medians overflow `value / median` to infinity for ordinary counts.
fn check_median(metric: Metric, field: &str, value: f64) -> Option<String> {
    if value.is_finite() && value >= f64::MIN_POSITIVE {
        None
    } else {
        Some(format!(
            "{}.{} must be a positive finite number of at least {:e}, got {}",
            metric,
            field,
            f64::MIN_POSITIVE,
            value
        ))
    }
}

fn check_weight(metric: Metric, value: f64) -> Option<String> {
    if value.is_finite() && value >= 0.0 {
        None
    } else {
        Some(format!(
            "{}.weight must be a non-negative finite number, got {}",
            metric, value
        ))
    }
}

/// Collect every validation message for a configuration.
pub fn collect_config_errors(config: &RankConfig) -> Vec<String> {
    let mut errors = Vec::new();

    for metric in Metric::ALL {
        errors.extend(check_median(metric, "median", config.median(metric, false)));
        errors.extend(check_weight(metric, config.weight(metric)));

        if metric == Metric::Commits {
            errors.extend(check_median(
                metric,
                "all_commits_median",
                config.median(metric, true),
            ));
        } else if config.metric(metric).all_commits_median.is_some() {
            errors.push(format!(
                "{}.all_commits_median is only supported for commits",
                metric
            ));
        }
    }

    let total = config.total_weight();
    if !total.is_finite() || total <= 0.0 {
        errors.push(format!(
            "total weight must be a positive finite number, got {}",
            total
        ));
    }

    errors
}

/// Validate a configuration, reporting all problems in one error.
pub fn validate_config(config: &RankConfig) -> Result<()> {
    let errors = collect_config_errors(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(RankError::InvalidConfig(errors.join("; ")))
    }
}

impl RankConfig {
    pub fn validate(&self) -> Result<()> {
        validate_config(self)
    }
}
