//! `uniasset icons` – regenerate every app icon PNG from the SVG sources.

use anyhow::Result;
use std::path::{Path, PathBuf};
use uniasset_core::config::UniassetConfig;
use uniasset_core::icons::{self, IconLayout, IconReport};

/// `--root`, else `[icons] project_root` from the config, else the working
/// directory. The config is not read when `--root` is given.
pub fn resolve_root<F>(root: Option<PathBuf>, load_config: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<UniassetConfig>,
{
    if let Some(root) = root {
        return Ok(root);
    }
    match load_config()?.icons.project_root {
        Some(r) => Ok(r),
        None => Ok(std::env::current_dir()?),
    }
}

pub fn run_icons(root: &Path) -> Result<()> {
    let layout = IconLayout::under(root);
    tracing::info!("icons root={}", root.display());

    let report = icons::generate(&layout)?;
    for line in summary_lines(root, &report) {
        println!("{line}");
    }
    Ok(())
}

/// Console summary: one line per PNG with paths relative to `root`.
pub fn summary_lines(root: &Path, report: &IconReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .outputs
        .iter()
        .map(|out| {
            let shown = out.path.strip_prefix(root).unwrap_or(&out.path);
            format!(
                "  -> {} ({}x{}{})  {}",
                shown.display(),
                out.width,
                out.height,
                if out.opaque { ", opaque" } else { "" },
                out.sha256.get(..12).unwrap_or(&out.sha256)
            )
        })
        .collect();
    if !report.swept.is_empty() {
        lines.push(format!("Removed {} stale temp file(s).", report.swept.len()));
    }
    lines.push(String::new());
    lines.push(format!("All {} app icons generated.", report.outputs.len()));
    lines
}
