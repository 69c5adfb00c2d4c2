//! Logo URL filtering.

/// Substrings that mark a logo cell as unusable: wiki media-viewer fragments,
/// inline base64 images, and two placeholder phrases left in the sheet.
pub const DISQUALIFYING_MARKERS: [&str; 4] = ["#/media", "data:image", "Not have", "Dangerous"];

/// Why a URL was rejected, or None if it is usable.
pub fn rejection_reason(url: &str) -> Option<&'static str> {
    if url.is_empty() {
        return Some("empty");
    }
    DISQUALIFYING_MARKERS
        .iter()
        .copied()
        .find(|marker| url.contains(marker))
}

/// True if `url` is non-empty and contains none of [`DISQUALIFYING_MARKERS`].
/// Matching is case-sensitive.
pub fn is_usable_logo_url(url: &str) -> bool {
    rejection_reason(url).is_none()
}
