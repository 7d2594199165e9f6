//! Cumulative distribution approximations used to squash metric ratios.
//!
//! Both helpers map a non-negative ratio onto `[0, 1)` with `f(0) == 0`,
//! increasing monotonically and flattening out as the ratio grows, so every
//! additional unit of activity is worth less than the previous one.

use serde::{Deserialize, Serialize};

/// Exponential CDF with base 2: `1 - 2^(-x)`.
pub fn exponential_cdf(x: f64) -> f64 {
    1.0 - 2f64.powf(-x)
}

/// Rational approximation of a log-normal CDF: `x / (1 + x)`.
///
/// This is not a true log-normal CDF. It has the same shape on the
/// non-negative axis and is cheap to evaluate.
pub fn log_normal_cdf(x: f64) -> f64 {
    x / (1.0 + x)
}

/// Which distribution helper a metric is scored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    Exponential,
    LogNormal,
}

impl Distribution {
    pub fn cdf(self, x: f64) -> f64 {
        match self {
            Distribution::Exponential => exponential_cdf(x),
            Distribution::LogNormal => log_normal_cdf(x),
        }
    }
}
