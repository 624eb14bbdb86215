use serde::Serialize;

/// XP needed to fill the progress bar once.
pub const XP_PER_LEVEL: u64 = 1000;

/// XP the server requires per level-up.
const SERVER_XP_PER_LEVEL: u64 = 100;

/// Progress toward the next level, as drawn under the student's level badge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    /// XP earned since the bar last filled.
    pub into_level: u64,
    /// XP still missing to fill the bar.
    pub remaining: u64,
    /// Bar fill, `0.0..100.0`.
    pub percent: f64,
}

impl LevelProgress {
    pub fn from_xp(xp: u64) -> Self {
        let into_level = xp % XP_PER_LEVEL;
        Self {
            into_level,
            remaining: XP_PER_LEVEL - into_level,
            percent: into_level as f64 / XP_PER_LEVEL as f64 * 100.0,
        }
    }
}

/// Level the server assigns for a total XP amount.
pub fn level_for_xp(xp: u64) -> u64 {
    xp / SERVER_XP_PER_LEVEL + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_half_way() {
        let progress = LevelProgress::from_xp(2500);
        assert_eq!(progress.into_level, 500);
        assert_eq!(progress.remaining, 500);
        assert_eq!(progress.percent, 50.0);
    }

    #[test]
    fn test_progress_on_boundary_is_empty_bar() {
        let progress = LevelProgress::from_xp(3000);
        assert_eq!(progress.into_level, 0);
        assert_eq!(progress.remaining, XP_PER_LEVEL);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_progress_for_new_student() {
        let progress = LevelProgress::from_xp(0);
        assert_eq!(progress.percent, 0.0);
        assert_eq!(LevelProgress::from_xp(999).into_level, 999);
    }

    #[test]
    fn test_level_for_xp() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(2500), 26);
    }
}
