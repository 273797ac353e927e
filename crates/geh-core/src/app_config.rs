#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Endpoint layout exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiLayout {
    /// `GET /products/` and `GET /products/{id}`.
    Legacy,
    /// `GET /api/v1/products` and `GET /api/v1/products/{id}`.
    V1,
}

impl ApiLayout {
    /// Path of the listing endpoint, relative to the API base URL.
    #[must_use]
    pub fn listing_path(self) -> &'static str {
        match self {
            ApiLayout::Legacy => "products/",
            ApiLayout::V1 => "api/v1/products",
        }
    }

    /// Path prefix of the single-item endpoint; the product id is appended.
    #[must_use]
    pub fn item_prefix(self) -> &'static str {
        match self {
            ApiLayout::Legacy => "products/",
            ApiLayout::V1 => "api/v1/products/",
        }
    }
}

/// How the detail view resolves a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLookup {
    /// Ask the single-item endpoint.
    Direct,
    /// Fetch the full listing and scan it by id, for backends without a
    /// single-item endpoint.
    Listing,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub api_base_url: String,
    pub image_base_url: String,
    pub api_layout: ApiLayout,
    pub detail_lookup: DetailLookup,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub currency: String,
}
