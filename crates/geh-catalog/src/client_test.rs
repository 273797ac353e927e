use super::*;

fn client(base_url: &str, layout: ApiLayout) -> CatalogClient {
    CatalogClient::new(base_url, layout, 5, "geh-test/0.1").expect("failed to build client")
}

#[test]
fn legacy_listing_url() {
    let c = client("https://geh-backend.onrender.com", ApiLayout::Legacy);
    assert_eq!(
        c.listing_url().unwrap().as_str(),
        "https://geh-backend.onrender.com/products/"
    );
}

#[test]
fn v1_listing_url() {
    let c = client("https://geh-backend.onrender.com/", ApiLayout::V1);
    assert_eq!(
        c.listing_url().unwrap().as_str(),
        "https://geh-backend.onrender.com/api/v1/products"
    );
}

#[test]
fn listing_url_keeps_base_path() {
    let c = client("https://example.com/shop", ApiLayout::Legacy);
    assert_eq!(
        c.listing_url().unwrap().as_str(),
        "https://example.com/shop/products/"
    );
}

#[test]
fn item_url_legacy() {
    let c = client("https://geh-backend.onrender.com", ApiLayout::Legacy);
    assert_eq!(
        c.item_url("64f1c0ffee").unwrap().as_str(),
        "https://geh-backend.onrender.com/products/64f1c0ffee"
    );
}

#[test]
fn item_url_v1() {
    let c = client("https://geh-backend.onrender.com", ApiLayout::V1);
    assert_eq!(
        c.item_url("64f1c0ffee").unwrap().as_str(),
        "https://geh-backend.onrender.com/api/v1/products/64f1c0ffee"
    );
}

#[test]
fn item_url_escapes_separators() {
    let c = client("https://example.com", ApiLayout::Legacy);
    assert_eq!(
        c.item_url("a/b?c").unwrap().as_str(),
        "https://example.com/products/a%2Fb%3Fc"
    );
}

#[test]
fn item_url_escapes_dots() {
    let c = client("https://example.com", ApiLayout::Legacy);
    assert_eq!(
        c.item_url("v1.2").unwrap().as_str(),
        "https://example.com/products/v1%2E2"
    );
}

#[test]
fn item_url_keeps_unreserved_punctuation() {
    let c = client("https://example.com", ApiLayout::Legacy);
    assert_eq!(
        c.item_url("sku-12_a~b").unwrap().as_str(),
        "https://example.com/products/sku-12_a~b"
    );
}

#[test]
fn new_rejects_invalid_base_url() {
    let result = CatalogClient::new("not a url", ApiLayout::Legacy, 5, "geh-test/0.1");
    assert!(
        matches!(result, Err(CatalogError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}
