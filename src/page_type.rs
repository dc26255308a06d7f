//! Page type resolution from URL paths.
//!
//! The page type is the last non-empty segment of the path, so `/front/share/`
//! and `/share` both resolve to `share`.

use url::Url;

/// Page type used when a page location is known but its path has no segments.
pub const FALLBACK_PAGE_TYPE: &str = "share";

/// Returns the last non-empty, trimmed `/`-separated segment of `path`, or `""`.
pub fn page_type_from_path(path: &str) -> String {
    path.split('/')
        .map(str::trim)
        .filter(|seg| !seg.is_empty())
        .next_back()
        .unwrap_or_default()
        .to_string()
}

/// Resolves the page type for the current page.
///
/// `None` means there is no page location at all (e.g. running outside a browser
/// shell), which yields `""`. A location whose path has no segments yields
/// [`FALLBACK_PAGE_TYPE`].
pub fn current_page_type(location: Option<&Url>) -> String {
    let Some(location) = location else {
        return String::new();
    };

    let page_type = page_type_from_path(location.path());
    if page_type.is_empty() {
        FALLBACK_PAGE_TYPE.to_string()
    } else {
        page_type
    }
}
