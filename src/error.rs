/// All errors that can occur while talking to the gamification API.
#[derive(thiserror::Error, Debug)]
pub enum LeagueBoardError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server rejected the bearer token, or none was supplied.
    #[error("unauthorized request to {url}")]
    Unauthorized { url: String },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the JSON we expected.
    #[error("failed to decode response body from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LeagueBoardError>;
