//! Configuration for baselines and weights.
//!
//! Without a config file every metric uses its built-in median and weight.
//! A `.rankcalc.toml` may override any of them per metric.

mod core;
mod loader;
pub mod validation;

pub use self::core::{
    default_config_toml, default_median, default_weight, MetricConfig, RankConfig,
    ALL_COMMITS_MEDIAN, COMMITS_MEDIAN, COMMITS_WEIGHT, FOLLOWERS_MEDIAN, FOLLOWERS_WEIGHT,
    ISSUES_MEDIAN, ISSUES_WEIGHT, PULL_REQUESTS_MEDIAN, PULL_REQUESTS_WEIGHT, REVIEWS_MEDIAN,
    REVIEWS_WEIGHT, STARS_MEDIAN, STARS_WEIGHT,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use validation::validate_config;
