//! `uniasset logo-map` – CSV sheet to TypeScript logo map.

use anyhow::Result;
use std::path::PathBuf;
use uniasset_core::config::UniassetConfig;
use uniasset_core::logo_map::{self, MapOptions, MapReport};

/// Flags override the config file. The config is only loaded when a flag
/// is missing, so explicit paths work even if it is unreadable.
pub fn resolve_map_options<F>(
    csv: Option<PathBuf>,
    out: Option<PathBuf>,
    load_config: F,
) -> Result<MapOptions>
where
    F: FnOnce() -> Result<UniassetConfig>,
{
    let (csv, out) = match (csv, out) {
        (Some(csv_path), Some(output_path)) => {
            return Ok(MapOptions {
                csv_path,
                output_path,
            })
        }
        partial => partial,
    };
    let cfg = load_config()?;
    let mut opts = MapOptions::from(&cfg.logo_map);
    if let Some(csv) = csv {
        opts.csv_path = csv;
    }
    if let Some(out) = out {
        opts.output_path = out;
    }
    Ok(opts)
}

pub fn run_logo_map(opts: &MapOptions) -> Result<()> {
    tracing::info!(
        "logo-map csv={} out={}",
        opts.csv_path.display(),
        opts.output_path.display()
    );

    let report = logo_map::generate(opts)?;
    for line in summary_lines(&report) {
        println!("{line}");
    }
    Ok(())
}

/// Console summary of a run, one string per printed line.
pub fn summary_lines(report: &MapReport) -> Vec<String> {
    let mut lines = vec![
        format!("Total valid universities: {}", report.total),
        format!(
            "  ({} rows read, {} skipped for missing or placeholder logo)",
            report.rows_read, report.rejected
        ),
        String::new(),
        format!("Generated {} mappings", report.total),
        String::new(),
        format!("First {} entries:", report.first.len()),
    ];
    lines.extend(report.first.iter().cloned());
    lines.push(String::new());
    lines.push(format!("Last {} entries:", report.last.len()));
    lines.extend(report.last.iter().cloned());
    if !report.collisions.is_empty() {
        lines.push(String::new());
        lines.push("Key collisions (last name wins at runtime):".to_string());
        for c in &report.collisions {
            lines.push(format!("  '{}': {}", c.key, c.names.join(" | ")));
        }
    }
    lines.push(String::new());
    lines.push(format!("Saved to {}", report.output.display()));
    lines
}
