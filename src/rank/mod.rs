//! Activity rank calculation.
//!
//! A user's rank is a weighted average of six per-metric scores, each metric
//! normalised against a baseline ("median") and squashed into `[0, 1)` by a
//! distribution helper. The average is inverted so that `0` is the best
//! possible rank and `1` means no activity at all, then mapped onto a letter
//! grade through a fixed threshold table.
//!
//! ```
//! use rankcalc::rank::{calculate_rank, Level, RankInput};
//!
//! let input = RankInput {
//!     commits: 250.0,
//!     pull_requests: 50.0,
//!     issues: 25.0,
//!     reviews: 2.0,
//!     stars: 50.0,
//!     followers: 10.0,
//!     ..RankInput::default()
//! };
//!
//! let result = calculate_rank(&input);
//! assert_eq!(result.level, Level::BPlus);
//! ```

pub mod calculation;
pub mod distribution;
pub mod level;
pub mod types;

pub use calculation::{calculate_rank, RankCalculator};
pub use distribution::{exponential_cdf, log_normal_cdf, Distribution};
pub use level::{Level, LEVEL_THRESHOLDS};
pub use types::{Metric, MetricScore, RankBreakdown, RankInput, RankResult};
