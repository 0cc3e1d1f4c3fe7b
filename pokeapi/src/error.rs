use crate::pokemon;

use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    RequestFailed(Arc<reqwest::Error>),
    #[error("invalid payload: {0}")]
    InvalidPayload(Arc<serde_json::Error>),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("no artwork available for pokemon #{0}")]
    ArtworkUnavailable(pokemon::Id),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidPayload(Arc::new(error))
    }
}
