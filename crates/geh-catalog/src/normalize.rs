//! Normalization from raw backend records to [`geh_core::Product`].
//!
//! Normalization never fails: every missing or malformed field degrades to a
//! default so the storefront always has something to render. The only records
//! dropped are those without an id, and only by [`normalize_catalog`].

use geh_core::{Category, Product, PLACEHOLDER_IMAGE_URL, UNNAMED_PRODUCT};
use serde_json::Value;

use crate::fields::{
    AVAILABILITY_FLAG_FIELD, CATEGORY_FIELDS, CATEGORY_FIXUPS, DESCRIPTION_FIELDS, ID_FIELDS,
    IMAGE_FIELDS, IMAGE_OBJECT_URL_FIELDS, NAME_FIELDS, PRICE_FIELDS, SPEC_FIELDS, STOCK_FIELDS,
};
use crate::image::resolve_image_url;
use crate::types::RawProduct;

/// Normalizes one raw record into a [`Product`].
///
/// Relative image paths are resolved against `image_base_url`. A record with
/// no id yields a product whose `id` is empty.
#[must_use]
pub fn normalize_product(raw: &RawProduct, image_base_url: &str) -> Product {
    Product {
        id: resolve_id(raw),
        name: first_text(raw, NAME_FIELDS).unwrap_or_else(|| UNNAMED_PRODUCT.to_string()),
        price: resolve_price(raw),
        category: normalize_category(first_text(raw, CATEGORY_FIELDS).as_deref()),
        description: first_text(raw, DESCRIPTION_FIELDS).unwrap_or_default(),
        specs: resolve_specs(raw),
        images: resolve_images(raw, image_base_url),
        available: resolve_available(raw),
    }
}

/// Normalizes a whole listing, keeping input order and dropping records
/// without an id.
#[must_use]
pub fn normalize_catalog(raws: &[RawProduct], image_base_url: &str) -> Vec<Product> {
    let products: Vec<Product> = raws
        .iter()
        .map(|raw| normalize_product(raw, image_base_url))
        .filter(|product| {
            if product.id.is_empty() {
                tracing::warn!(name = %product.name, "dropping product record without an id");
                false
            } else {
                true
            }
        })
        .collect();
    tracing::debug!(
        received = raws.len(),
        kept = products.len(),
        "normalized catalog"
    );
    products
}

/// Title-cases a raw category and maps it onto a [`Category`].
///
/// Unknown or missing values map to [`Category::Other`].
#[must_use]
pub fn normalize_category(raw: Option<&str>) -> Category {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Category::Other;
    };
    let titled = title_case(raw);
    let label = CATEGORY_FIXUPS
        .iter()
        .find(|(from, _)| *from == titled)
        .map_or(titled.as_str(), |(_, to)| *to);
    Category::from_label(label).unwrap_or(Category::Other)
}

/// Upper-cases the first character and lower-cases the rest.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Coerces a JSON value to a finite number.
///
/// Accepts numbers, numeric strings and booleans (`true` = 1).
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn resolve_id(raw: &RawProduct) -> String {
    ID_FIELDS
        .iter()
        .filter_map(|key| raw.get(key))
        .find_map(id_from_value)
        .unwrap_or_default()
}

fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        // MongoDB extended JSON: {"$oid": "..."}
        Value::Object(map) => map.get("$oid").and_then(id_from_value),
        _ => None,
    }
}

/// Returns the first non-blank string among `keys`, trimmed.
fn first_text(raw: &RawProduct, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Returns the first field among `keys` that is present and not a blank string.
fn first_filled<'a>(raw: &'a RawProduct, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find(|value| value.as_str().map_or(true, |s| !s.trim().is_empty()))
}

fn resolve_price(raw: &RawProduct) -> f64 {
    first_filled(raw, PRICE_FIELDS)
        .and_then(coerce_number)
        .map_or(0.0, |price| price.max(0.0))
}

/// Numeric stock wins over the string flag whenever it coerces.
fn resolve_available(raw: &RawProduct) -> bool {
    if let Some(stock) = first_filled(raw, STOCK_FIELDS).and_then(coerce_number) {
        return stock > 0.0;
    }
    raw.get(AVAILABILITY_FLAG_FIELD)
        .and_then(Value::as_str)
        .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("available"))
}

fn resolve_specs(raw: &RawProduct) -> Vec<String> {
    match raw.first_present(SPEC_FIELDS) {
        Some(Value::Array(items)) => items.iter().filter_map(spec_line).collect(),
        Some(single @ Value::String(_)) => spec_line(single).into_iter().collect(),
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(key, value)| spec_line(value).map(|v| format!("{key}: {v}")))
            .collect(),
        _ => Vec::new(),
    }
}

fn spec_line(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn resolve_images(raw: &RawProduct, image_base_url: &str) -> Vec<String> {
    let paths: Vec<&str> = match raw.first_present(IMAGE_FIELDS) {
        Some(Value::Array(items)) => items.iter().filter_map(image_path).collect(),
        Some(other) => image_path(other).into_iter().collect(),
        None => Vec::new(),
    };

    let images: Vec<String> = paths
        .into_iter()
        .map(|path| resolve_image_url(path, image_base_url))
        .collect();

    if images.is_empty() {
        vec![PLACEHOLDER_IMAGE_URL.to_string()]
    } else {
        images
    }
}

/// Extracts a non-blank path from a string or `{url|src}` image entry.
fn image_path(value: &Value) -> Option<&str> {
    let path = match value {
        Value::String(s) => s.as_str(),
        Value::Object(map) => IMAGE_OBJECT_URL_FIELDS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))?,
        _ => return None,
    };
    Some(path).filter(|p| !p.trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
