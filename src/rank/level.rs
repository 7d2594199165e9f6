//! Letter grades and the rank threshold table.

use crate::errors::RankError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade assigned to a rank, ordered best (`S`) to worst (`C`).
///
/// The derived ordering follows declaration order, so `Level::S < Level::C`
/// and a smaller level is always a better grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "S")]
    S,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
}

/// Upper bounds on `rank * 100`, ascending, paired with the grade they award.
pub const LEVEL_THRESHOLDS: [(f64, Level); 9] = [
    (1.0, Level::S),
    (12.5, Level::APlus),
    (25.0, Level::A),
    (37.5, Level::AMinus),
    (50.0, Level::BPlus),
    (62.5, Level::B),
    (75.0, Level::BMinus),
    (87.5, Level::CPlus),
    (100.0, Level::C),
];

impl Level {
    /// All grades, best to worst.
    pub const ALL: [Level; 9] = [
        Level::S,
        Level::APlus,
        Level::A,
        Level::AMinus,
        Level::BPlus,
        Level::B,
        Level::BMinus,
        Level::CPlus,
        Level::C,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::S => "S",
            Level::APlus => "A+",
            Level::A => "A",
            Level::AMinus => "A-",
            Level::BPlus => "B+",
            Level::B => "B",
            Level::BMinus => "B-",
            Level::CPlus => "C+",
            Level::C => "C",
        }
    }

    /// First threshold (ascending) that is `>= rank * 100`.
    ///
    /// Returns `None` when the rank lies above the last threshold or is NaN.
    pub fn lookup(rank: f64) -> Option<Level> {
        let percent = rank * 100.0;
        LEVEL_THRESHOLDS
            .iter()
            .find(|(threshold, _)| percent <= *threshold)
            .map(|(_, level)| *level)
    }

    /// Grade for a rank, saturating to [`Level::C`] when no threshold matches.
    pub fn from_rank(rank: f64) -> Level {
        Self::lookup(rank).unwrap_or_else(|| {
            log::debug!("Rank {} is outside the threshold table, using C", rank);
            Level::C
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s.trim())
            .ok_or_else(|| RankError::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries_round_up() {
        assert_eq!(Level::from_rank(0.0), Level::S);
        assert_eq!(Level::from_rank(0.01), Level::S);
        assert_eq!(Level::from_rank(0.0101), Level::APlus);
        assert_eq!(Level::from_rank(0.125), Level::APlus);
        assert_eq!(Level::from_rank(0.25), Level::A);
        assert_eq!(Level::from_rank(0.3), Level::AMinus);
        assert_eq!(Level::from_rank(0.5), Level::BPlus);
        assert_eq!(Level::from_rank(0.51), Level::B);
        assert_eq!(Level::from_rank(0.75), Level::BMinus);
        assert_eq!(Level::from_rank(0.8), Level::CPlus);
        assert_eq!(Level::from_rank(1.0), Level::C);
    }

    #[test]
    fn test_lookup_outside_table() {
        assert_eq!(Level::lookup(1.2), None);
        assert_eq!(Level::lookup(f64::NAN), None);
        assert_eq!(Level::from_rank(1.2), Level::C);
        assert_eq!(Level::from_rank(f64::NAN), Level::C);
    }

    #[test]
    fn test_negative_rank_is_best_grade() {
        assert_eq!(Level::from_rank(-0.5), Level::S);
    }

    #[test]
    fn test_ordering_is_best_to_worst() {
        assert!(Level::S < Level::APlus);
        assert!(Level::CPlus < Level::C);
        let mut sorted = Level::ALL;
        sorted.sort();
        assert_eq!(sorted, Level::ALL);
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
        assert!("D".parse::<Level>().is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Level::AMinus).unwrap(), "\"A-\"");
        let level: Level = serde_json::from_str("\"C+\"").unwrap();
        assert_eq!(level, Level::CPlus);
    }
}
