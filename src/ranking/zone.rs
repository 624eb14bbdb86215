//! Promotion/demotion bands of a weekly league board.
//!
//! The top fifth of a league (rounded up) moves up a tier at the weekly reset
//! and the bottom fifth (rounded down) moves down. Everybody else keeps their
//! league.

use serde::Serialize;

use crate::model::RankingPeriod;

/// Where a row sits relative to the promotion/demotion cut-offs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Zone {
    Promote,
    Stable,
    Demote,
}

/// `ceil(total * 0.2)`, in integers.
pub fn promote_count(total: usize) -> usize {
    (total * 2).div_ceil(10)
}

/// `floor(total * 0.2)`, in integers.
pub fn demote_count(total: usize) -> usize {
    total * 2 / 10
}

/// Classify the 0-based `index` of a list with `total` rows.
///
/// The promotion check runs first, so on the tiny lists where both bands
/// cover the same row (e.g. `total == 1`) that row is promoted. Global boards
/// and out-of-range indices are always [`Zone::Stable`].
pub fn zone_for(period: RankingPeriod, index: usize, total: usize) -> Zone {
    if !period.has_zones() || index >= total {
        return Zone::Stable;
    }

    if index < promote_count(total) {
        Zone::Promote
    } else if index >= total - demote_count(total) {
        Zone::Demote
    } else {
        Zone::Stable
    }
}

/// Icon shown next to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ZoneIcon {
    ArrowUp,
    ArrowDown,
    Minus,
}

/// Row highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ZoneStyle {
    /// Green left border, light green background.
    PromoteHighlight,
    /// Red left border, light red background.
    DemoteHighlight,
    /// Transparent border so rows stay aligned.
    Neutral,
}

/// Rendering hint for a row. Global boards carry neither icon nor style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneHint {
    pub icon: Option<ZoneIcon>,
    pub style: Option<ZoneStyle>,
}

impl ZoneHint {
    pub fn new(period: RankingPeriod, zone: Zone) -> Self {
        if !period.has_zones() {
            return Self {
                icon: None,
                style: None,
            };
        }

        let (icon, style) = match zone {
            Zone::Promote => (ZoneIcon::ArrowUp, ZoneStyle::PromoteHighlight),
            Zone::Stable => (ZoneIcon::Minus, ZoneStyle::Neutral),
            Zone::Demote => (ZoneIcon::ArrowDown, ZoneStyle::DemoteHighlight),
        };
        Self {
            icon: Some(icon),
            style: Some(style),
        }
    }
}

impl Zone {
    /// Legend caption shown under a weekly board.
    pub fn legend(self) -> &'static str {
        match self {
            Zone::Promote => "Повышение",
            Zone::Stable => "Сохранение места",
            Zone::Demote => "Понижение",
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn weekly_zones(total: usize) -> Vec<Zone> {
        (0..total)
            .map(|i| zone_for(RankingPeriod::Weekly, i, total))
            .collect()
    }

    #[test]
    fn test_ten_rows_split_two_six_two() {
        let zones = weekly_zones(10);

        assert_eq!(zones[..2], [Zone::Promote; 2]);
        assert_eq!(zones[2..8], [Zone::Stable; 6]);
        assert_eq!(zones[8..], [Zone::Demote; 2]);
    }

    #[test]
    fn test_single_row_is_promoted() {
        assert_eq!(weekly_zones(1), vec![Zone::Promote]);
    }

    #[test]
    fn test_small_boards() {
        use Zone::*;
        assert_eq!(weekly_zones(2), vec![Promote, Stable]);
        assert_eq!(weekly_zones(4), vec![Promote, Stable, Stable, Stable]);
        assert_eq!(weekly_zones(5), vec![Promote, Stable, Stable, Stable, Demote]);
        assert_eq!(
            weekly_zones(7),
            vec![Promote, Promote, Stable, Stable, Stable, Stable, Demote]
        );
    }

    #[test]
    fn test_counts_match_fractional_formula() {
        for total in 1..=200usize {
            let share = total as f64 * 0.2;
            assert_eq!(promote_count(total), share.ceil() as usize, "total {total}");
            assert_eq!(demote_count(total), share.floor() as usize, "total {total}");
        }
    }

    #[test]
    fn test_zone_sizes_add_up() {
        for total in 1..=100usize {
            let counts = weekly_zones(total).into_iter().counts();
            let promoted = counts.get(&Zone::Promote).copied().unwrap_or(0);
            let demoted = counts.get(&Zone::Demote).copied().unwrap_or(0);
            let stable = counts.get(&Zone::Stable).copied().unwrap_or(0);

            assert_eq!(promoted + demoted + stable, total);
            assert_eq!(promoted, promote_count(total).min(total));
            assert!(demoted <= demote_count(total));
        }
    }

    #[test]
    fn test_global_is_always_stable() {
        for total in 1..=30usize {
            for index in 0..total {
                assert_eq!(zone_for(RankingPeriod::Global, index, total), Zone::Stable);
            }
        }
    }

    #[test]
    fn test_out_of_range_is_stable() {
        assert_eq!(zone_for(RankingPeriod::Weekly, 0, 0), Zone::Stable);
        assert_eq!(zone_for(RankingPeriod::Weekly, 10, 10), Zone::Stable);
    }

    #[test]
    fn test_zone_is_deterministic() {
        for total in 1..=25usize {
            for index in 0..total {
                assert_eq!(
                    zone_for(RankingPeriod::Weekly, index, total),
                    zone_for(RankingPeriod::Weekly, index, total)
                );
            }
        }
    }

    #[test]
    fn test_hints() {
        let hint = ZoneHint::new(RankingPeriod::Weekly, Zone::Promote);
        assert_eq!(hint.icon, Some(ZoneIcon::ArrowUp));
        assert_eq!(hint.style, Some(ZoneStyle::PromoteHighlight));

        let hint = ZoneHint::new(RankingPeriod::Weekly, Zone::Demote);
        assert_eq!(hint.icon, Some(ZoneIcon::ArrowDown));
        assert_eq!(hint.style, Some(ZoneStyle::DemoteHighlight));

        let hint = ZoneHint::new(RankingPeriod::Weekly, Zone::Stable);
        assert_eq!(hint.icon, Some(ZoneIcon::Minus));
        assert_eq!(hint.style, Some(ZoneStyle::Neutral));

        let hint = ZoneHint::new(RankingPeriod::Global, Zone::Stable);
        assert_eq!(hint.icon, None);
        assert_eq!(hint.style, None);
        assert_eq!(ZoneIcon::ArrowUp.to_string(), "arrow-up");
        assert_eq!(Zone::Demote.to_string(), "demote");
    }
}
