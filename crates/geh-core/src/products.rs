use serde::{Deserialize, Serialize};

/// Image path used whenever a product has no resolvable image.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder-image.png";

/// Display name given to records that carry no usable name.
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

/// Category tabs offered by the storefront, in display order. `"All"` is the
/// filter wildcard and never appears on a [`Product`].
pub const CATEGORY_TABS: [&str; 6] = ["All", "iPhones", "Laptops", "Accessories", "Consoles", "TVs"];

/// Canonical product category.
///
/// Serialized as its display label (e.g. `"iPhones"`, `"TVs"`), which is also
/// the exact string the catalog filter compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "iPhones")]
    IPhones,
    Laptops,
    Accessories,
    Consoles,
    #[serde(rename = "TVs")]
    Tvs,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::IPhones,
        Category::Laptops,
        Category::Accessories,
        Category::Consoles,
        Category::Tvs,
        Category::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::IPhones => "iPhones",
            Category::Laptops => "Laptops",
            Category::Accessories => "Accessories",
            Category::Consoles => "Consoles",
            Category::Tvs => "TVs",
            Category::Other => "Other",
        }
    }

    /// Looks up a category by its exact (case-sensitive) label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A storefront product, normalized from whatever shape the backend returned.
///
/// Built once per raw record and never mutated afterwards; a new fetch
/// replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier (`_id`, `id` or `productId`).
    pub id: String,
    pub name: String,
    /// Non-negative price; malformed input degrades to `0.0`.
    pub price: f64,
    pub category: Category,
    pub description: String,
    pub specs: Vec<String>,
    /// Resolved image URLs. Never empty: falls back to [`PLACEHOLDER_IMAGE_URL`].
    pub images: Vec<String>,
    pub available: bool,
}

impl Product {
    /// The image shown first on listing cards and the detail view.
    #[must_use]
    pub fn main_image(&self) -> &str {
        self.images
            .first()
            .map_or(PLACEHOLDER_IMAGE_URL, String::as_str)
    }
}
