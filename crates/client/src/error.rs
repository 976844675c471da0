use thiserror::Error;

/// Transport failures surface to the caller as-is; there is no automatic
/// retry. The user resubmits, or the next state change reissues the query.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("graphql request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("graphql errors: {0}")]
    GraphQL(String),
    #[error("malformed graphql response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("graphql response carried no data")]
    MissingData,
}
