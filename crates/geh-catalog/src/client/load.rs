//! Fetch-and-normalize entry points used by the storefront views.

use geh_core::{DetailLookup, Product};

use crate::error::CatalogError;
use crate::filter::find_by_id;
use crate::normalize::{normalize_catalog, normalize_product};

use super::CatalogClient;

impl CatalogClient {
    /// Fetches the listing and normalizes it, dropping records without an id.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_products`].
    pub async fn load_catalog(&self, image_base_url: &str) -> Result<Vec<Product>, CatalogError> {
        let raws = self.fetch_products().await?;
        Ok(normalize_catalog(&raws, image_base_url))
    }

    /// Loads one normalized product for the detail view.
    ///
    /// With [`DetailLookup::Direct`] the single-item endpoint is used, and a
    /// record that carries no id of its own takes the requested one. With
    /// [`DetailLookup::Listing`] the full listing is fetched and scanned.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] if no product has the requested id.
    /// - Any transport or decode error from the underlying fetch.
    pub async fn load_product(
        &self,
        id: &str,
        image_base_url: &str,
        lookup: DetailLookup,
    ) -> Result<Product, CatalogError> {
        match lookup {
            DetailLookup::Direct => {
                let raw = self.fetch_product(id).await?;
                let mut product = normalize_product(&raw, image_base_url);
                if product.id.is_empty() {
                    product.id = id.to_owned();
                }
                Ok(product)
            }
            DetailLookup::Listing => {
                let products = self.load_catalog(image_base_url).await?;
                find_by_id(&products, id)
                    .cloned()
                    .ok_or_else(|| CatalogError::NotFound { id: id.to_owned() })
            }
        }
    }
}
