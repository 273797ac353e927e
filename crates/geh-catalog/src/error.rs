use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response shape for {context}: found {found}")]
    UnexpectedShape { context: String, found: &'static str },

    #[error("product not found: {id}")]
    NotFound { id: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Coarse classification of a [`CatalogError`] as seen by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request failed or the backend answered with a non-success status.
    Network,
    /// The backend answered, but not with a listing or a product record.
    Decode,
    /// The requested product does not exist. An expected outcome, not a fault.
    NotFound,
}

impl CatalogError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Http(_)
            | CatalogError::UnexpectedStatus { .. }
            | CatalogError::InvalidBaseUrl { .. } => ErrorKind::Network,
            CatalogError::Deserialize { .. } | CatalogError::UnexpectedShape { .. } => {
                ErrorKind::Decode
            }
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Short message suitable for an error banner.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self.kind() {
            ErrorKind::Network => format!("Could not reach the store: {self}"),
            ErrorKind::Decode => format!("The store sent data that could not be read: {self}"),
            ErrorKind::NotFound => "Product not found.".to_string(),
        }
    }
}
