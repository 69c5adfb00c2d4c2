//! Throwaway app project trees with shape-only SVG sources (no text, so
//! rendering does not depend on installed fonts).

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="260" viewBox="0 0 200 260">
  <rect x="20" y="20" width="160" height="160" rx="24" fill="#0b6e4f"/>
  <rect x="40" y="200" width="120" height="30" fill="#0b6e4f"/>
</svg>"##;

pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100">
  <circle cx="50" cy="50" r="50" fill="#0b6e4f"/>
  <path d="M30 65 L50 30 L70 65 Z" fill="#ffffff"/>
</svg>"##;

/// Creates `<tmp>/src/assets/svg/` with both sources.
pub fn with_sources() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    write_source(root.path(), "pakuni-logo.svg", LOGO_SVG);
    write_source(root.path(), "pakuni-icon.svg", ICON_SVG);
    root
}

pub fn write_source(root: &Path, name: &str, contents: &str) {
    let dir = root.join("src").join("assets").join("svg");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}
