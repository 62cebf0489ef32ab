use perto_core::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("source not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("normalization error in source '{category}': {reason}")]
    Normalization { category: Category, reason: String },

    #[error("essential source '{category}' unavailable: {source}")]
    EssentialSourceUnavailable {
        category: Category,
        #[source]
        source: Box<CatalogError>,
    },
}
