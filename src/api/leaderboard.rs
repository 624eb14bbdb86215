use tracing::{debug, instrument};

use crate::api::{self, Endpoint};
use crate::error::Result;
use crate::model::{Leaderboard, RankingPeriod};

pub(crate) const DEFAULT_LIMIT: u32 = 50;
pub(crate) const MAX_LIMIT: u32 = 100;

/// Mirror the server's handling of `limit`, so the request says what will be served.
pub(crate) fn clamp_limit(limit: u32) -> u32 {
    if limit == 0 || limit > MAX_LIMIT {
        DEFAULT_LIMIT
    } else {
        limit
    }
}

#[instrument(skip(endpoint))]
pub(crate) async fn get_leaderboard(
    endpoint: &Endpoint,
    period: RankingPeriod,
    limit: u32,
) -> Result<Leaderboard> {
    let limit = clamp_limit(limit);
    let url = endpoint.url(&format!("leaderboard/{period}?limit={limit}"));
    let leaderboard: Leaderboard = api::get_json(endpoint, &url).await?;
    debug!(
        count = leaderboard.entries.len(),
        viewer_rank = leaderboard.viewer_rank,
        %period,
        "fetched leaderboard"
    );
    Ok(leaderboard)
}
