use tracing::{debug, instrument};

use crate::api::{self, Endpoint};
use crate::error::Result;
use crate::model::{DashboardData, StudentProfile};

#[instrument(skip(endpoint))]
pub(crate) async fn get_profile(endpoint: &Endpoint) -> Result<StudentProfile> {
    let url = endpoint.url("student/dashboard");
    let dashboard: DashboardData = api::get_json(endpoint, &url).await?;
    debug!(
        profile_id = %dashboard.profile.id,
        league_id = dashboard.profile.current_league_id,
        "fetched student profile"
    );
    Ok(dashboard.profile)
}
