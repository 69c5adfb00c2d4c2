//! SVG loading and rasterization via resvg.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Parser options with system fonts loaded, so the logo wordmark renders.
pub fn svg_options() -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();
    opt
}

/// Reads and parses an SVG file. Missing or malformed files are errors.
pub fn load_svg(path: &Path, opt: &usvg::Options) -> Result<usvg::Tree> {
    let data = fs::read(path).with_context(|| format!("read SVG {}", path.display()))?;
    let tree = usvg::Tree::from_data(&data, opt)
        .with_context(|| format!("parse SVG {}", path.display()))?;
    tracing::debug!(
        "loaded {} ({}x{})",
        path.display(),
        tree.size().width(),
        tree.size().height()
    );
    Ok(tree)
}

/// Renders `tree` into a `width`x`height` canvas, scaled uniformly to fit and
/// centred (`xMidYMid meet`). Pixels are straight (non-premultiplied) RGBA.
pub fn rasterize(tree: &usvg::Tree, width: u32, height: u32) -> Result<RgbaImage> {
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .with_context(|| format!("allocate {width}x{height} pixmap"))?;

    let size = tree.size();
    let scale = (width as f32 / size.width()).min(height as f32 / size.height());
    let dx = (width as f32 - size.width() * scale) / 2.0;
    let dy = (height as f32 - size.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, dx, dy);
    resvg::render(tree, transform, &mut pixmap.as_mut());

    let mut img = RgbaImage::new(width, height);
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(img)
}
