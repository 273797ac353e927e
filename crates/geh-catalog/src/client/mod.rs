//! HTTP client for the storefront backend's product endpoints.

mod load;

use std::time::Duration;

use geh_core::{ApiLayout, AppConfig};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::CatalogError;
use crate::types::{decode_listing, decode_single, RawProduct};

/// Characters escaped in a product id path segment.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

/// HTTP client for the product listing and single-item endpoints.
///
/// Every call is a single attempt: failures are returned to the caller
/// as-is, never retried.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    layout: ApiLayout,
}

impl CatalogClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        base_url: &str,
        layout: ApiLayout,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends endpoint paths instead
        // of replacing the last segment.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            layout,
        })
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.api_base_url,
            config.api_layout,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches the raw product listing.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure or timeout.
    /// - [`CatalogError::UnexpectedStatus`] on any non-2xx status.
    /// - [`CatalogError::Deserialize`] if the body is not JSON.
    /// - [`CatalogError::UnexpectedShape`] if the JSON is not a listing.
    pub async fn fetch_products(&self) -> Result<Vec<RawProduct>, CatalogError> {
        let url = self.listing_url()?;
        let body = self.get_json(url, "product listing").await?;
        let records = decode_listing(body)?;
        tracing::debug!(count = records.len(), "fetched product listing");
        Ok(records)
    }

    /// Fetches one raw product record by id.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] if the id is blank or only dots, the
    ///   backend answers 404, or the body is `null`.
    /// - [`CatalogError::Http`], [`CatalogError::UnexpectedStatus`],
    ///   [`CatalogError::Deserialize`], [`CatalogError::UnexpectedShape`] as
    ///   for [`Self::fetch_products`].
    pub async fn fetch_product(&self, id: &str) -> Result<RawProduct, CatalogError> {
        // URL parsing treats `..` (escaped or not) as a parent segment.
        if id.trim().is_empty() || id.chars().all(|c| c == '.') {
            return Err(CatalogError::NotFound { id: id.to_owned() });
        }
        let url = self.item_url(id)?;
        let body = match self.get_json(url, &format!("product {id}")).await {
            Err(CatalogError::UnexpectedStatus { status: 404, .. }) => {
                return Err(CatalogError::NotFound { id: id.to_owned() })
            }
            other => other?,
        };
        decode_single(body, id)
    }

    async fn get_json(&self, url: Url, context: &str) -> Result<Value, CatalogError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| CatalogError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Builds the listing URL for the configured layout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if the path cannot be joined.
    fn listing_url(&self) -> Result<Url, CatalogError> {
        self.join(self.layout.listing_path())
    }

    /// Builds the single-item URL, encoding `id` as one path segment.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if the path cannot be joined.
    fn item_url(&self, id: &str) -> Result<Url, CatalogError> {
        let encoded = utf8_percent_encode(id, ID_SEGMENT);
        self.join(&format!("{}{encoded}", self.layout.item_prefix()))
    }

    fn join(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
