use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::model::{League, Leaderboard, LeaderboardEntry, RankingPeriod, StudentProfile};
use crate::ranking::countdown::{time_until_reset, Countdown};
use crate::ranking::zone::{zone_for, Zone, ZoneHint};

/// One rendered row of a leaderboard table.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow<'a> {
    /// 1-based position in the fetched list.
    pub position: usize,
    pub entry: &'a LeaderboardEntry,
    pub zone: Zone,
    pub hint: ZoneHint,
    pub is_viewer: bool,
}

/// Row counts per zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ZoneCounts {
    pub promote: usize,
    pub stable: usize,
    pub demote: usize,
}

/// Everything the leaderboard screen shows for one period.
///
/// A view is built from a single fetch and thrown away when the period changes
/// or the screen closes.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardView {
    period: RankingPeriod,
    leaderboard: Leaderboard,
    viewer_id: Option<String>,
    league: Option<League>,
}

impl LeaderboardView {
    pub fn new(period: RankingPeriod, leaderboard: Leaderboard, viewer_id: Option<String>) -> Self {
        Self {
            period,
            leaderboard,
            viewer_id,
            league: None,
        }
    }

    /// Build the view as seen by `profile`: their own row flagged and their league in the header.
    pub fn for_viewer(
        period: RankingPeriod,
        leaderboard: Leaderboard,
        profile: &StudentProfile,
        leagues: &[League],
    ) -> Self {
        Self::new(period, leaderboard, Some(profile.user_id.clone()))
            .with_league(leagues, profile.current_league_id)
    }

    /// The "no data" state shown when nothing could be fetched.
    pub fn empty(period: RankingPeriod) -> Self {
        Self::new(period, Leaderboard::default(), None)
    }

    /// Attach the viewer's current league for the header. Only weekly boards show one.
    pub fn with_league(mut self, leagues: &[League], current_league_id: u32) -> Self {
        if !self.period.has_zones() {
            return self;
        }
        self.league = leagues.iter().find(|l| l.id == current_league_id).cloned();
        if self.league.is_none() {
            debug!(current_league_id, "viewer league not among known leagues");
        }
        self
    }

    pub fn period(&self) -> RankingPeriod {
        self.period
    }

    pub fn league(&self) -> Option<&League> {
        self.league.as_ref()
    }

    pub fn len(&self) -> usize {
        self.leaderboard.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaderboard.entries.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = LeaderboardRow<'_>> + '_ {
        let total = self.len();
        self.leaderboard
            .entries
            .iter()
            .enumerate()
            .map(move |(index, entry)| {
                let zone = zone_for(self.period, index, total);
                LeaderboardRow {
                    position: index + 1,
                    entry,
                    zone,
                    hint: ZoneHint::new(self.period, zone),
                    is_viewer: self.is_viewer(entry),
                }
            })
    }

    pub fn viewer_row(&self) -> Option<LeaderboardRow<'_>> {
        self.rows().find(|row| row.is_viewer)
    }

    /// The viewer's rank, from the list if they are on it and from the server otherwise.
    pub fn viewer_rank(&self) -> Option<u32> {
        self.viewer_row()
            .map(|row| row.entry.rank)
            .or(self.leaderboard.viewer_rank)
    }

    pub fn zone_counts(&self) -> ZoneCounts {
        let counts = self.rows().map(|row| row.zone).counts();
        let count = |zone: Zone| counts.get(&zone).copied().unwrap_or_default();
        ZoneCounts {
            promote: count(Zone::Promote),
            stable: count(Zone::Stable),
            demote: count(Zone::Demote),
        }
    }

    /// Countdown for the league header. Global boards never reset.
    pub fn reset_countdown(&self, now: DateTime<Utc>) -> Option<Countdown> {
        self.period.has_zones().then(|| time_until_reset(now))
    }

    /// Legend captions, in display order. Empty for boards without zones.
    pub fn legend(&self) -> Vec<(Zone, &'static str)> {
        if !self.period.has_zones() {
            return Vec::new();
        }
        [Zone::Promote, Zone::Stable, Zone::Demote]
            .into_iter()
            .map(|zone| (zone, zone.legend()))
            .collect()
    }

    fn is_viewer(&self, entry: &LeaderboardEntry) -> bool {
        self.viewer_id.as_deref() == Some(entry.user_id.as_str())
    }
}
