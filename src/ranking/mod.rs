//! Presentation logic for leaderboards: zones, the reset countdown and the
//! per-view state built from a fetched board.

pub mod countdown;
pub mod presenter;
pub mod ticker;
pub mod zone;

pub use countdown::{next_reset, time_until_reset, time_until_reset_now, Countdown};
pub use presenter::{LeaderboardRow, LeaderboardView, ZoneCounts};
pub use ticker::{CountdownTicker, DEFAULT_TICK};
pub use zone::{demote_count, promote_count, zone_for, Zone, ZoneHint, ZoneIcon, ZoneStyle};
