//! Map key derivation.

/// Derives the map key for a university name: every character outside
/// `[A-Za-z0-9]` is dropped. Distinct names may yield the same key.
///
/// - `derive_key("Quaid-i-Azam University")` → `"QuaidiAzamUniversity"`
pub fn derive_key(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}
