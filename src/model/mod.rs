mod leaderboard;
mod league;
mod profile;

pub use leaderboard::*;
pub use league::*;
pub use profile::*;
