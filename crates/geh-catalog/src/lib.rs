pub mod client;
pub mod error;
pub mod fields;
pub mod filter;
pub mod image;
pub mod normalize;
pub mod types;
pub mod view;

pub use client::CatalogClient;
pub use error::{CatalogError, ErrorKind};
pub use filter::{filter_products, find_by_id, ALL_CATEGORIES};
pub use image::resolve_image_url;
pub use normalize::{normalize_catalog, normalize_product};
pub use types::RawProduct;
pub use view::{LoadTicket, ViewSlot, ViewState};
