use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::EnumString;

/// Which ranking a leaderboard describes.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RankingPeriod {
    /// League standings for the current week. Promotion and demotion apply.
    #[default]
    Weekly,
    /// All-time standings by total XP. Nobody moves between leagues here.
    Global,
}

impl RankingPeriod {
    /// Whether promotion/demotion zones are meaningful for this period.
    pub fn has_zones(self) -> bool {
        matches!(self, RankingPeriod::Weekly)
    }
}

/// One participant's standing in a ranking period.
///
/// `xp` is the weekly XP on a weekly board and the total XP on the global one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub avatar_url: Option<String>,
    pub xp: u64,
    #[serde(default)]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_id: Option<u32>,
}

impl LeaderboardEntry {
    /// Full name as shown in the table, e.g. `"Anna Petrova"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Placeholder letter used when the entry has no avatar.
    pub fn initial(&self) -> Option<char> {
        self.first_name.chars().next()
    }
}

/// A ranked list as returned by the server, plus the viewer's own rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(rename = "leaderboard", default)]
    pub entries: Vec<LeaderboardEntry>,
    /// Present even when the viewer is outside the returned page.
    #[serde(rename = "user_rank", default, skip_serializing_if = "Option::is_none")]
    pub viewer_rank: Option<u32>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
