//! University logo map generator.
//!
//! Turns the universities spreadsheet (CSV with `university_name` and
//! `logo_url` columns) into a TypeScript module exporting
//! `UNIVERSITY_LOGO_MAP`, a static record from a name-derived key to the
//! logo URL. Rows with an empty or placeholder URL are dropped; entries are
//! ordered by university name.
//!
//! Keys are not deduplicated. Two names that sanitize to the same key both
//! produce a line and the later one wins when the object literal is
//! evaluated; such collisions are logged and returned in the report.

mod error;
mod filter;
mod key;
mod render;
mod source;

pub use error::MapError;
pub use filter::{is_usable_logo_url, rejection_reason, DISQUALIFYING_MARKERS};
pub use key::derive_key;
pub use render::{entry_line, render_module};
pub use source::{read_rows, SourceRow};

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::LogoMapConfig;
use crate::storage;

/// Number of entry lines shown at each end of the summary.
const SAMPLE_LEN: usize = 5;

/// Where to read the CSV and write the module.
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub csv_path: PathBuf,
    pub output_path: PathBuf,
}

impl From<&LogoMapConfig> for MapOptions {
    fn from(cfg: &LogoMapConfig) -> Self {
        Self {
            csv_path: cfg.csv_path.clone(),
            output_path: cfg.output_path.clone(),
        }
    }
}

/// One line of the generated map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Original (trimmed) university name; determines ordering.
    pub name: String,
    pub key: String,
    pub url: String,
}

/// Several names sanitizing to the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    /// Names in output order; the last one is the value seen at runtime.
    pub names: Vec<String>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct MapReport {
    /// Data rows in the CSV.
    pub rows_read: usize,
    /// Rows dropped by the URL filter.
    pub rejected: usize,
    /// Entries written.
    pub total: usize,
    /// First entry lines, as written.
    pub first: Vec<String>,
    /// Last entry lines, as written.
    pub last: Vec<String>,
    pub collisions: Vec<KeyCollision>,
    pub output: PathBuf,
}

/// Keeps rows with a usable URL, keyed by name. A later row with the same
/// name replaces an earlier one. Iteration order is lexicographic by name.
pub fn collect_records(rows: Vec<SourceRow>) -> BTreeMap<String, String> {
    let mut records = BTreeMap::new();
    for row in rows {
        if let Some(reason) = rejection_reason(&row.logo_url) {
            tracing::debug!("skip {:?}: logo url {}", row.university_name, reason);
            continue;
        }
        if url::Url::parse(&row.logo_url).is_err() {
            tracing::warn!(
                "logo url for {:?} is not an absolute URL, kept as-is: {}",
                row.university_name,
                row.logo_url
            );
        }
        if let Some(prev) = records.insert(row.university_name.clone(), row.logo_url) {
            tracing::debug!("duplicate row for {:?} replaces {}", row.university_name, prev);
        }
    }
    records
}

/// Derives the key for every record, preserving name order.
pub fn build_entries(records: &BTreeMap<String, String>) -> Vec<MapEntry> {
    records
        .iter()
        .map(|(name, url)| MapEntry {
            name: name.clone(),
            key: derive_key(name),
            url: url.clone(),
        })
        .collect()
}

/// Keys produced by more than one name, sorted by key.
pub fn find_key_collisions(entries: &[MapEntry]) -> Vec<KeyCollision> {
    let mut by_key: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for e in entries {
        by_key.entry(e.key.as_str()).or_default().push(e.name.as_str());
    }
    by_key
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(key, names)| KeyCollision {
            key: key.to_string(),
            names: names.into_iter().map(String::from).collect(),
        })
        .collect()
}

/// Reads the CSV, filters and sorts the rows, and overwrites the output
/// module. The output's parent directory must exist.
pub fn generate(opts: &MapOptions) -> Result<MapReport, MapError> {
    let rows = read_rows(&opts.csv_path)?;
    let rows_read = rows.len();
    let rejected = rows
        .iter()
        .filter(|r| !is_usable_logo_url(&r.logo_url))
        .count();

    let records = collect_records(rows);
    let entries = build_entries(&records);
    let collisions = find_key_collisions(&entries);
    for c in &collisions {
        tracing::warn!(
            "key {:?} shared by {:?}; only the last survives at runtime",
            c.key,
            c.names
        );
    }

    let lines = render_module(&entries);
    storage::write_atomic(&opts.output_path, lines.join("\n").as_bytes()).map_err(|source| {
        MapError::Write {
            path: opts.output_path.clone(),
            source,
        }
    })?;
    tracing::info!(
        "wrote {} logo entries to {}",
        entries.len(),
        opts.output_path.display()
    );

    let skip_last = entries.len().saturating_sub(SAMPLE_LEN);
    Ok(MapReport {
        rows_read,
        rejected,
        total: entries.len(),
        first: entries.iter().take(SAMPLE_LEN).map(entry_line).collect(),
        last: entries.iter().skip(skip_last).map(entry_line).collect(),
        collisions,
        output: opts.output_path.clone(),
    })
}
