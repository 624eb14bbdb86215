pub use client::GamificationClient;
pub use error::{LeagueBoardError, Result};
pub use model::*;
pub use progress::{level_for_xp, LevelProgress, XP_PER_LEVEL};
pub use ranking::{CountdownTicker, LeaderboardView, Zone};

pub mod client;
pub mod error;
pub mod model;
pub mod progress;
pub mod ranking;

pub(crate) mod api;
