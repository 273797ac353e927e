//! Raw backend payloads.
//!
//! ## Observed shapes
//!
//! ### Listing
//! `GET /products/` returns a bare JSON array of records, while
//! `GET /api/v1/products` wraps the array as `{"products": [...]}`. A wrapped
//! object without a `products` field is treated as an empty catalog.
//!
//! ### Single item
//! `GET /products/{id}` returns the record itself, or `null` when the id is
//! unknown. Some deployments wrap it as `{"product": {...}}`.
//!
//! ### Records
//! Field names drifted across backend versions (`productName` vs `title`,
//! `productStock` vs `qty`, ...), so records are kept as untyped JSON maps and
//! resolved through [`crate::fields`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CatalogError;

/// One product record exactly as the backend sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProduct(Map<String, Value>);

impl RawProduct {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value if it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Returns the field's value, treating JSON `null` as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Returns the first field among `keys` that is present and not `null`.
    #[must_use]
    pub fn first_present(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|key| self.get(key))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extracts product records from a listing body.
///
/// Accepts a bare array or an object with a `products` array. Array elements
/// that are not objects are skipped.
///
/// # Errors
///
/// Returns [`CatalogError::UnexpectedShape`] if the body is neither an array
/// nor an object, or if `products` is present but not an array.
pub fn decode_listing(body: Value) -> Result<Vec<RawProduct>, CatalogError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("products") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(CatalogError::UnexpectedShape {
                    context: "products field of listing".to_string(),
                    found: json_type_name(&other),
                })
            }
        },
        other => {
            return Err(CatalogError::UnexpectedShape {
                context: "product listing".to_string(),
                found: json_type_name(&other),
            })
        }
    };

    let total = items.len();
    let records: Vec<RawProduct> = items.into_iter().filter_map(RawProduct::from_value).collect();
    if records.len() < total {
        tracing::warn!(
            skipped = total - records.len(),
            "listing contained non-object entries"
        );
    }
    Ok(records)
}

/// Extracts a single product record from an item body.
///
/// # Errors
///
/// - [`CatalogError::NotFound`] if the body (or its `product` envelope) is `null`.
/// - [`CatalogError::UnexpectedShape`] if the body is not an object.
pub fn decode_single(body: Value, id: &str) -> Result<RawProduct, CatalogError> {
    let not_found = || CatalogError::NotFound { id: id.to_owned() };
    match body {
        Value::Null => Err(not_found()),
        Value::Object(mut map) => {
            if map.contains_key("product") {
                match map.remove("product") {
                    Some(Value::Object(inner)) => Ok(RawProduct(inner)),
                    Some(Value::Null) | None => Err(not_found()),
                    Some(other) => Err(CatalogError::UnexpectedShape {
                        context: format!("product envelope for {id}"),
                        found: json_type_name(&other),
                    }),
                }
            } else {
                Ok(RawProduct(map))
            }
        }
        other => Err(CatalogError::UnexpectedShape {
            context: format!("product {id}"),
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
