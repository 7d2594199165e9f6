use crate::rank::{Level, RankBreakdown, RankResult};
use colored::*;
use std::fmt::Write;

/// Colour a grade by band: S and A grades green, B yellow, C red.
pub fn colorize_level(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::S | Level::APlus | Level::A | Level::AMinus => label.green().bold(),
        Level::BPlus | Level::B | Level::BMinus => label.yellow().bold(),
        Level::CPlus | Level::C => label.red().bold(),
    }
}

pub fn format_result_terminal(result: &RankResult) -> String {
    format!(
        "Level: {}  (percentile {})",
        colorize_level(result.level),
        result.percentile
    )
}

pub fn format_breakdown_terminal(breakdown: &RankBreakdown) -> String {
    let mut out = String::new();
    writeln!(out, "{}", format_result_terminal(&breakdown.result())).unwrap();
    writeln!(
        out,
        "Rank:  {:.6}  ({:.2}% of the way to the bottom)",
        breakdown.rank,
        breakdown.rank * 100.0
    ).unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "{:<14} {:>12} {:>10} {:>10} {:>8} {:>10} {:>14}",
        "metric".bold(),
        "value",
        "median",
        "ratio",
        "score",
        "weight",
        "contribution"
    ).unwrap();
    for m in &breakdown.metrics {
        writeln!(
            out,
            "{:<14} {:>12} {:>10} {:>10.4} {:>8.4} {:>10} {:>14.2}",
            m.metric.as_str(),
            m.value,
            m.baseline,
            m.ratio,
            m.score,
            m.weight,
            m.contribution
        ).unwrap();
    }
    write!(
        out,
        "{:<14} {:>12} {:>10} {:>10} {:>8} {:>10} {:>14.2}",
        "total", "", "", "", "", breakdown.total_weight, breakdown.weighted_sum
    ).unwrap();
    out
}
