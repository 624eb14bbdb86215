use std::time::Duration;

use tracing::instrument;

use crate::api::{self, Endpoint};
use crate::error::{LeagueBoardError, Result};
use crate::model::*;
use crate::ranking::LeaderboardView;

/// Base URL of a locally running platform API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Request timeout used by [`GamificationClient::from_env`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const BASE_URL_ENV: &str = "LEAGUE_BOARD_API_URL";
const TOKEN_ENV: &str = "LEAGUE_BOARD_API_TOKEN";

/// The main entry point for the platform's gamification API.
///
/// `GamificationClient` wraps a [`reqwest::Client`] and exposes methods to
/// fetch leaderboards, leagues and the signed-in student's profile.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> league_board::Result<()> {
/// use league_board::{GamificationClient, RankingPeriod};
///
/// let client = GamificationClient::new().with_token("jwt-from-login");
/// let board = client.get_leaderboard(RankingPeriod::Weekly, 50).await?;
/// println!("{} students this week", board.entries.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GamificationClient {
    endpoint: Endpoint,
}

impl GamificationClient {
    /// Create a new client with default settings against [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_BASE_URL)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint {
                http: client,
                base_url: base_url.into(),
                token: None,
            },
        }
    }

    /// Configure a client from `LEAGUE_BOARD_API_URL` and `LEAGUE_BOARD_API_TOKEN`.
    ///
    /// Unset variables fall back to [`DEFAULT_BASE_URL`] and no token.
    pub fn from_env() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(LeagueBoardError::Client)?;
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let client = Self::with_client(http, base_url);
        Ok(match std::env::var(TOKEN_ENV) {
            Ok(token) if !token.is_empty() => client.with_token(token),
            _ => client,
        })
    }

    /// Point the client at another API root, e.g. `https://learn.example/api/v1`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.endpoint.base_url = base_url.into();
        self
    }

    /// Send `token` as a bearer token on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.endpoint.token = Some(token.into());
        self
    }

    /// The API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    /// Fetch a ranked board. `limit` outside `1..=100` is replaced by 50.
    #[instrument(skip(self))]
    pub async fn get_leaderboard(&self, period: RankingPeriod, limit: u32) -> Result<Leaderboard> {
        api::leaderboard::get_leaderboard(&self.endpoint, period, limit).await
    }

    /// Fetch the viewer's league board for the current week.
    pub async fn get_weekly(&self, limit: u32) -> Result<Leaderboard> {
        self.get_leaderboard(RankingPeriod::Weekly, limit).await
    }

    /// Fetch the all-time board.
    pub async fn get_global(&self, limit: u32) -> Result<Leaderboard> {
        self.get_leaderboard(RankingPeriod::Global, limit).await
    }

    /// Fetch every league tier.
    #[instrument(skip(self))]
    pub async fn get_leagues(&self) -> Result<Vec<League>> {
        api::leagues::get_leagues(&self.endpoint).await
    }

    /// Fetch the signed-in student's gamification profile.
    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<StudentProfile> {
        api::profile::get_profile(&self.endpoint).await
    }

    /// Fetch everything the leaderboard screen needs for `period`.
    #[instrument(skip(self))]
    pub async fn load_view(&self, period: RankingPeriod, limit: u32) -> Result<LeaderboardView> {
        let (profile, leagues, leaderboard) = tokio::try_join!(
            self.get_profile(),
            self.get_leagues(),
            self.get_leaderboard(period, limit),
        )?;

        Ok(LeaderboardView::for_viewer(
            period,
            leaderboard,
            &profile,
            &leagues,
        ))
    }
}

impl Default for GamificationClient {
    fn default() -> Self {
        Self::new()
    }
}
