//! Field aliases for each canonical product attribute.
//!
//! Each list is ordered by precedence: the first alias present on a record
//! (and not `null`) wins. Supporting a new backend field name means adding it
//! to the matching list.

pub const ID_FIELDS: &[&str] = &["_id", "id", "productId"];

pub const NAME_FIELDS: &[&str] = &["productName", "title", "name"];

pub const PRICE_FIELDS: &[&str] = &["productPrice", "price", "amount"];

pub const STOCK_FIELDS: &[&str] = &["productStock", "stock", "qty", "quantity"];

/// String flag consulted only when no stock field yields a number.
pub const AVAILABILITY_FLAG_FIELD: &str = "available";

pub const IMAGE_FIELDS: &[&str] = &["productImages", "image", "images"];

pub const CATEGORY_FIELDS: &[&str] = &["productCategory", "category", "type"];

pub const DESCRIPTION_FIELDS: &[&str] = &["productDescription", "description", "details"];

pub const SPEC_FIELDS: &[&str] = &["productSpecification", "specs"];

/// Keys holding the URL when an image entry is an object instead of a string.
pub const IMAGE_OBJECT_URL_FIELDS: &[&str] = &["url", "src"];

/// Title-cased category values that must be rewritten to their canonical label.
pub const CATEGORY_FIXUPS: &[(&str, &str)] = &[("Iphones", "iPhones"), ("Tvs", "TVs")];
