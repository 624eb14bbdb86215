pub(crate) mod leaderboard;
pub(crate) mod leagues;
pub(crate) mod profile;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{LeagueBoardError, Result};

/// Where and as whom requests are sent.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub http: reqwest::Client,
    pub base_url: String,
    pub token: Option<String>,
}

impl Endpoint {
    /// Join `path` onto the base URL without doubling slashes.
    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// GET `url` and decode the body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(endpoint: &Endpoint, url: &str) -> Result<T> {
    debug!(url, "fetching");

    let mut request = endpoint.http.get(url);
    if let Some(token) = &endpoint.token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|e| LeagueBoardError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(LeagueBoardError::Unauthorized {
            url: url.to_owned(),
        });
    }
    if !status.is_success() {
        return Err(LeagueBoardError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|e| LeagueBoardError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
