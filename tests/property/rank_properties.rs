//! Property-based tests for the rank calculation
//!
//! These tests verify invariants that should hold for all inputs:
//! - Both distribution helpers start at zero, increase, and stay below one
//! - Rank stays within (0, 1] for non-negative statistics
//! - Grades never get worse as rank improves
//! - More activity never worsens the rank
//! - The calculation is deterministic

use proptest::prelude::*;
use rankcalc::{
    calculate_rank, exponential_cdf, log_normal_cdf, Level, Metric, RankCalculator, RankInput,
};

fn stat() -> impl Strategy<Value = f64> {
    0.0..1_000_000.0f64
}

fn rank_input() -> impl Strategy<Value = RankInput> {
    (
        any::<bool>(),
        stat(),
        stat(),
        stat(),
        stat(),
        stat(),
        stat(),
        stat(),
    )
        .prop_map(
            |(include_all_commits, commits, pull_requests, issues, reviews, repositories, stars, followers)| {
                RankInput {
                    include_all_commits,
                    commits,
                    pull_requests,
                    issues,
                    reviews,
                    repositories,
                    stars,
                    followers,
                }
            },
        )
}

fn metric() -> impl Strategy<Value = Metric> {
    prop::sample::select(Metric::ALL.to_vec())
}

fn with_value(input: RankInput, metric: Metric, value: f64) -> RankInput {
    let mut out = input;
    match metric {
        Metric::Commits => out.commits = value,
        Metric::PullRequests => out.pull_requests = value,
        Metric::Issues => out.issues = value,
        Metric::Reviews => out.reviews = value,
        Metric::Stars => out.stars = value,
        Metric::Followers => out.followers = value,
    }
    out
}

#[test]
fn distributions_start_at_zero() {
    assert_eq!(exponential_cdf(0.0), 0.0);
    assert_eq!(log_normal_cdf(0.0), 0.0);
}

proptest! {
    /// Property: exponential CDF is strictly increasing and below one
    #[test]
    fn prop_exponential_cdf_increasing_and_bounded(
        x in 0.0..20.0f64,
        delta in 0.01..10.0f64,
    ) {
        let low = exponential_cdf(x);
        let high = exponential_cdf(x + delta);
        prop_assert!(low < high);
        prop_assert!(high < 1.0);
        prop_assert!(low >= 0.0);
    }

    /// Property: log-normal approximation is strictly increasing and below one
    #[test]
    fn prop_log_normal_cdf_increasing_and_bounded(
        x in 0.0..1_000_000.0f64,
        delta in 0.01..1000.0f64,
    ) {
        let low = log_normal_cdf(x);
        let high = log_normal_cdf(x + delta);
        prop_assert!(low < high);
        prop_assert!(high < 1.0);
        prop_assert!(low >= 0.0);
    }

    /// Property: exponential CDF never reaches one for moderate inputs
    #[test]
    fn prop_exponential_cdf_below_one(x in 0.0..50.0f64) {
        prop_assert!(exponential_cdf(x) < 1.0);
    }

    /// Property: rank lies in (0, 1] for non-negative statistics
    #[test]
    fn prop_rank_in_unit_interval(input in rank_input()) {
        let rank = RankCalculator::default().rank(&input);
        prop_assert!(rank > 0.0, "rank {} not positive", rank);
        prop_assert!(rank <= 1.0, "rank {} above one", rank);
    }

    /// Property: a better rank never yields a worse grade
    #[test]
    fn prop_grade_monotonic_in_rank(a in 0.0..=1.0f64, b in 0.0..=1.0f64) {
        let (better, worse) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Level::from_rank(better) <= Level::from_rank(worse));
    }

    /// Property: every rank in [0, 1] matches a threshold
    #[test]
    fn prop_unit_ranks_always_match(rank in 0.0..=1.0f64) {
        prop_assert!(Level::lookup(rank).is_some());
    }

    /// Property: raising any metric never worsens the rank or the grade
    #[test]
    fn prop_more_activity_never_hurts(
        input in rank_input(),
        metric in metric(),
        extra in 0.0..1000.0f64,
    ) {
        let calculator = RankCalculator::default();
        let boosted = with_value(input, metric, input.value(metric) + extra);
        prop_assert!(calculator.rank(&boosted) <= calculator.rank(&input));
        prop_assert!(calculator.calculate(&boosted).level <= calculator.calculate(&input).level);
    }

    /// Property: repositories never influence the result
    #[test]
    fn prop_repositories_ignored(input in rank_input(), repositories in stat()) {
        let other = RankInput { repositories, ..input };
        prop_assert_eq!(calculate_rank(&input), calculate_rank(&other));
    }

    /// Property: identical input always gives identical output
    #[test]
    fn prop_calculation_is_deterministic(input in rank_input()) {
        let first = calculate_rank(&input);
        let second = calculate_rank(&input);
        prop_assert_eq!(first, second);
        let calculator = RankCalculator::default();
        prop_assert_eq!(calculator.rank(&input).to_bits(), calculator.rank(&input).to_bits());
    }

    /// Property: counting all commits changes the rank whenever commits are non-zero
    #[test]
    fn prop_all_commits_baseline_is_observable(
        input in rank_input(),
        commits in 1.0..10_000.0f64,
    ) {
        let calculator = RankCalculator::default();
        let recent = RankInput { include_all_commits: false, commits, ..input };
        let full = RankInput { include_all_commits: true, ..recent };
        prop_assert!(calculator.rank(&full) > calculator.rank(&recent));
    }

    /// Property: percentile is 10 with all commits and 0 otherwise
    #[test]
    fn prop_percentile_follows_flag(input in rank_input()) {
        let expected = if input.include_all_commits { 10.0 } else { 0.0 };
        prop_assert_eq!(calculate_rank(&input).percentile, expected);
    }
}
