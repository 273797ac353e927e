//! Plain-text rendering of the catalog listing and product detail views.

use geh_core::Product;

pub(crate) const NOT_FOUND_MESSAGE: &str = "Product not found.";
const NO_PRODUCTS_MESSAGE: &str = "No products found.";
const NO_SPECS_MESSAGE: &str = "No specifications available";
const NAME_WIDTH: usize = 40;

/// Formats a price with the storefront currency and two decimals.
pub(crate) fn format_price(currency: &str, price: f64) -> String {
    format!("{currency} {price:.2}")
}

pub(crate) fn stock_label(available: bool) -> &'static str {
    if available {
        "In Stock"
    } else {
        "Out of Stock"
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width - 3).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Renders the filtered listing as a table, one product per row.
pub(crate) fn render_listing(products: &[&Product], currency: &str) -> String {
    if products.is_empty() {
        return format!("{NO_PRODUCTS_MESSAGE}\n");
    }

    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(format!(
        "{:<26}{:<42}{:<13}{:<16}STOCK",
        "ID", "NAME", "CATEGORY", "PRICE"
    ));
    for product in products {
        lines.push(format!(
            "{:<26}{:<42}{:<13}{:<16}{}",
            product.id,
            truncate(&product.name, NAME_WIDTH),
            product.category.label(),
            format_price(currency, product.price),
            stock_label(product.available)
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Renders the detail view for a single product.
///
/// The main image is listed first; a product without images shows the
/// placeholder.
pub(crate) fn render_detail(product: &Product, currency: &str) -> String {
    let mut lines = vec![
        product.name.clone(),
        format!("Category: {}", product.category),
        format!("Price: {}", format_price(currency, product.price)),
        format!("Availability: {}", stock_label(product.available)),
    ];

    if !product.description.is_empty() {
        lines.push(String::new());
        lines.push(product.description.clone());
    }

    lines.push(String::new());
    lines.push("Specifications:".to_string());
    if product.specs.is_empty() {
        lines.push(format!("  {NO_SPECS_MESSAGE}"));
    } else {
        lines.extend(product.specs.iter().map(|spec| format!("  - {spec}")));
    }

    lines.push(String::new());
    lines.push("Images:".to_string());
    lines.push(format!("  {} (main)", product.main_image()));
    lines.extend(
        product
            .images
            .iter()
            .skip(1)
            .map(|image| format!("  {image}")),
    );

    lines.push(String::new());
    lines.join("\n")
}
