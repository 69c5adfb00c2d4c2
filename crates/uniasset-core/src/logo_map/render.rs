//! TypeScript module rendering.

use super::MapEntry;

pub const DECLARATION: &str = "export const UNIVERSITY_LOGO_MAP: Record<string, string> = {";
pub const HEADER_COMMENTS: [&str; 3] = [
    "  // All 257 Pakistani Universities - Logo URLs from Official Sources",
    "  // Updated: January 2026",
    "  // Auto-generated from CSV data",
];
pub const CLOSING: &str = "};";

/// Renders the full module, one element per line. Join with `\n` (no
/// trailing newline) to get the file contents.
pub fn render_module(entries: &[MapEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + HEADER_COMMENTS.len() + 3);
    lines.push(DECLARATION.to_string());
    lines.extend(HEADER_COMMENTS.iter().map(|c| c.to_string()));
    lines.push(String::new());
    lines.extend(entries.iter().map(entry_line));
    lines.push(CLOSING.to_string());
    lines
}

/// `  '<key>': '<url>',`
pub fn entry_line(entry: &MapEntry) -> String {
    format!("  '{}': '{}',", entry.key, escape_single_quoted(&entry.url))
}

fn escape_single_quoted(s: &str) -> String {
    if !s.contains(&['\'', '\\'][..]) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
