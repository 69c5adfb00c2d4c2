//! App icon generator.
//!
//! Rasterizes `pakuni-logo.svg` and `pakuni-icon.svg` into the fixed PNG set
//! the app ships: in-app logo and icons, the Play Store icon, and square and
//! round launcher icons for every Android density bucket. Sizes and shapes
//! are constants (see [`target`]); only the project root varies.
//!
//! Output directories are created when missing and never cleared. Each file
//! is written through a `.part` temp file; a failure leaves the files of the
//! steps already completed in place.

pub mod compose;
mod layout;
pub mod raster;
pub mod target;

pub use layout::IconLayout;
pub use target::{plan, Backdrop, Compose, DensityBucket, RasterTarget, VectorSource};

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ImageBuffer, ImageEncoder, Pixel, PixelWithColorType, RgbaImage};
use resvg::usvg;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::{checksum, storage};

/// One written PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Written as RGB (no alpha channel).
    pub opaque: bool,
    /// SHA-256 of the PNG bytes, lowercase hex.
    pub sha256: String,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default)]
pub struct IconReport {
    pub outputs: Vec<OutputFile>,
    /// Stale `.part` files removed from the output directories.
    pub swept: Vec<PathBuf>,
}

/// Parsed sources and finished renders, so each (source, size) pair is
/// rasterized once per run.
struct RenderCache<'a> {
    layout: &'a IconLayout,
    opt: usvg::Options<'static>,
    trees: HashMap<VectorSource, usvg::Tree>,
    renders: HashMap<(VectorSource, u32, u32), RgbaImage>,
}

impl<'a> RenderCache<'a> {
    fn new(layout: &'a IconLayout) -> Self {
        Self {
            layout,
            opt: raster::svg_options(),
            trees: HashMap::new(),
            renders: HashMap::new(),
        }
    }

    fn render(&mut self, source: VectorSource, width: u32, height: u32) -> Result<&RgbaImage> {
        let key = (source, width, height);
        if !self.renders.contains_key(&key) {
            if !self.trees.contains_key(&source) {
                let tree = raster::load_svg(&self.layout.source_path(source), &self.opt)?;
                self.trees.insert(source, tree);
            }
            let img = raster::rasterize(&self.trees[&source], width, height)?;
            self.renders.insert(key, img);
        }
        Ok(&self.renders[&key])
    }
}

fn encode_png<P>(img: &ImageBuffer<P, Vec<u8>>) -> Result<Vec<u8>>
where
    P: Pixel<Subpixel = u8> + PixelWithColorType,
{
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), img.width(), img.height(), P::COLOR_TYPE)
        .context("encode PNG")?;
    Ok(buf)
}

/// Produces the PNG bytes for one target.
fn build_target(cache: &mut RenderCache<'_>, target: &RasterTarget) -> Result<Vec<u8>> {
    match target.compose {
        Compose::Plain => encode_png(cache.render(target.source, target.width, target.height)?),
        Compose::Centred {
            render,
            inner,
            backdrop,
        } => {
            let fg = compose::resample(cache.render(target.source, render, render)?, inner);
            let mut canvas = compose::on_white(&fg, target.width);
            match backdrop {
                Backdrop::WhiteSquare => encode_png(&compose::flatten_rgb(&canvas)),
                Backdrop::WhiteCircle => {
                    compose::circle_mask(&mut canvas);
                    encode_png(&canvas)
                }
            }
        }
    }
}

/// Runs the whole pipeline for `layout`.
pub fn generate(layout: &IconLayout) -> Result<IconReport> {
    for dir in [&layout.images_dir, &layout.store_dir] {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }

    let mut cache = RenderCache::new(layout);
    let mut report = IconReport::default();
    let mut dirs: Vec<PathBuf> = Vec::new();

    for target in plan(layout) {
        if let Some(parent) = target.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
            if !dirs.iter().any(|d| d == parent) {
                dirs.push(parent.to_path_buf());
            }
        }

        let png = build_target(&mut cache, &target)
            .with_context(|| format!("generate {}", target.path.display()))?;
        storage::write_atomic(&target.path, &png)
            .with_context(|| format!("write {}", target.path.display()))?;
        tracing::info!(
            "wrote {} ({}x{})",
            target.path.display(),
            target.width,
            target.height
        );

        report.outputs.push(OutputFile {
            opaque: target.is_opaque(),
            path: target.path,
            width: target.width,
            height: target.height,
            sha256: checksum::sha256_reader(png.as_slice())?,
        });
    }

    for dir in &dirs {
        let removed = storage::sweep_temp_files(dir)
            .with_context(|| format!("clean temp files in {}", dir.display()))?;
        for path in &removed {
            tracing::debug!("removed stale {}", path.display());
        }
        report.swept.extend(removed);
    }

    Ok(report)
}
