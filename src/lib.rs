// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod output;
pub mod rank;

// Re-export commonly used types
pub use crate::config::{load_config, load_config_from_path, MetricConfig, RankConfig};
pub use crate::errors::RankError;
pub use crate::rank::{
    calculate_rank, exponential_cdf, log_normal_cdf, Level, Metric, MetricScore, RankBreakdown,
    RankCalculator, RankInput, RankResult,
};
