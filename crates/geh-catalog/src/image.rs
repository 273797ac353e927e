//! Image URL resolution against the backend's media host.

use geh_core::PLACEHOLDER_IMAGE_URL;

const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "data:"];

/// Resolves a raw image path to a URL the storefront can load.
///
/// - Empty paths resolve to [`PLACEHOLDER_IMAGE_URL`].
/// - Absolute URLs (`http://`, `https://`, `data:`) are returned unchanged.
/// - Anything else is joined onto `base_url` with exactly one `/` between
///   them, whatever slashes either side carried.
#[must_use]
pub fn resolve_image_url(path: &str, base_url: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return PLACEHOLDER_IMAGE_URL.to_string();
    }

    if is_absolute(path) {
        return path.to_string();
    }

    let relative = path.trim_start_matches(['/', '\\']);
    let base = base_url.trim().trim_end_matches('/');
    format!("{base}/{relative}")
}

fn is_absolute(path: &str) -> bool {
    ABSOLUTE_PREFIXES.iter().any(|prefix| {
        path.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
