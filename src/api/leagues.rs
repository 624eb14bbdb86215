use tracing::{debug, instrument};

use crate::api::{self, Endpoint};
use crate::error::Result;
use crate::model::{League, LeaguesData};

#[instrument(skip(endpoint))]
pub(crate) async fn get_leagues(endpoint: &Endpoint) -> Result<Vec<League>> {
    let url = endpoint.url("gamification/leagues");
    let data: LeaguesData = api::get_json(endpoint, &url).await?;
    debug!(count = data.leagues.len(), "fetched leagues");
    Ok(data.leagues)
}
