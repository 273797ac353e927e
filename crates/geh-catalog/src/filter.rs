//! Catalog filtering and lookup over normalized products.

use geh_core::Product;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Returns the products visible for a category tab and search box.
///
/// `category` is compared exactly against each product's category label
/// unless it is [`ALL_CATEGORIES`]; a label no product carries matches
/// nothing. A non-blank `query` keeps products whose name or description
/// contains it, ignoring case. Input order is preserved.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], category: &str, query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category.label() == category)
        .filter(|p| needle.is_empty() || matches_query(p, &needle))
        .collect()
}

fn matches_query(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Finds the first product whose id equals `id` exactly.
#[must_use]
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use geh_core::{Category, PLACEHOLDER_IMAGE_URL};

    use super::*;

    fn make_product(id: &str, name: &str, category: Category, description: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: 100.0,
            category,
            description: description.to_string(),
            specs: vec![],
            images: vec![PLACEHOLDER_IMAGE_URL.to_string()],
            available: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            make_product("1", "iPhone 15 Pro", Category::IPhones, "Titanium design"),
            make_product("2", "MacBook Air", Category::Laptops, "Thin and light"),
            make_product("3", "USB-C Charger", Category::Accessories, "Fast charging for PRO devices"),
            make_product("4", "PlayStation 5", Category::Consoles, "Next-gen gaming"),
            make_product("5", "iPhone 13", Category::IPhones, "Dual camera"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn all_with_empty_query_returns_everything_in_order() {
        let products = catalog();
        let visible = filter_products(&products, "All", "");
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn category_filter_keeps_only_matching_category() {
        let products = vec![
            make_product("a", "iPhone 15", Category::IPhones, ""),
            make_product("b", "ThinkPad", Category::Laptops, ""),
        ];
        let visible = filter_products(&products, "iPhones", "");
        assert_eq!(ids(&visible), vec!["a"]);
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let products = catalog();
        assert!(filter_products(&products, "iphones", "").is_empty());
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let products = catalog();
        assert!(filter_products(&products, "Drones", "").is_empty());
    }

    #[test]
    fn query_matches_name_or_description_ignoring_case() {
        let products = catalog();
        let visible = filter_products(&products, "All", "pro");
        assert_eq!(ids(&visible), vec!["1", "3"]);
    }

    #[test]
    fn query_is_trimmed() {
        let products = catalog();
        let visible = filter_products(&products, "All", "  macbook  ");
        assert_eq!(ids(&visible), vec!["2"]);
    }

    #[test]
    fn whitespace_query_is_ignored() {
        let products = catalog();
        assert_eq!(filter_products(&products, "All", "   ").len(), 5);
    }

    #[test]
    fn category_and_query_intersect() {
        let products = catalog();
        let visible = filter_products(&products, "iPhones", "13");
        assert_eq!(ids(&visible), vec!["5"]);
        assert!(filter_products(&products, "Laptops", "iphone").is_empty());
    }

    #[test]
    fn other_category_is_filterable() {
        let products = vec![
            make_product("x", "Mystery box", Category::Other, ""),
            make_product("y", "iPhone", Category::IPhones, ""),
        ];
        assert_eq!(ids(&filter_products(&products, "Other", "")), vec!["x"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_products(&[], "All", "anything").is_empty());
    }

    #[test]
    fn find_by_id_returns_match() {
        let products = catalog();
        let found = find_by_id(&products, "4").expect("expected product 4");
        assert_eq!(found.name, "PlayStation 5");
    }

    #[test]
    fn find_by_id_returns_first_duplicate() {
        let products = vec![
            make_product("dup", "First", Category::Other, ""),
            make_product("dup", "Second", Category::Other, ""),
        ];
        assert_eq!(find_by_id(&products, "dup").map(|p| p.name.as_str()), Some("First"));
    }

    #[test]
    fn find_by_id_is_exact() {
        let products = catalog();
        assert!(find_by_id(&products, " 4").is_none());
        assert!(find_by_id(&products, "").is_none());
    }

    #[test]
    fn find_by_id_on_empty_list_is_none() {
        assert!(find_by_id(&[], "x").is_none());
    }
}
