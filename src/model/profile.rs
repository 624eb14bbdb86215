use serde::{Deserialize, Serialize};

/// Gamification state of the signed-in student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Id of the profile row.
    pub id: String,
    /// Id of the account. Leaderboard rows are keyed by this one.
    pub user_id: String,
    #[serde(default)]
    pub grade: u32,
    pub xp: u64,
    pub level: u32,
    pub current_league_id: u32,
    #[serde(default)]
    pub weekly_xp: u64,
    #[serde(default)]
    pub current_streak: u32,
}

/// The dashboard payload. Only the profile is of interest here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DashboardData {
    pub profile: StudentProfile,
}
