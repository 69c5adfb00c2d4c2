//! Canvas compositing: white backdrops, circular masks, RGB flattening.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Offset that centres `inner` inside `outer`, rounded down.
pub fn centre_offset(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}

/// Resamples `img` to `size`x`size` with Lanczos3.
///
/// Filtering runs on premultiplied colour so fully transparent pixels
/// (black with zero alpha) do not bleed dark fringes into the edges.
pub fn resample(img: &RgbaImage, size: u32) -> RgbaImage {
    if img.dimensions() == (size, size) {
        return img.clone();
    }
    let mut pre = img.clone();
    pre.pixels_mut().for_each(premultiply);
    let mut out = imageops::resize(&pre, size, size, FilterType::Lanczos3);
    out.pixels_mut().for_each(demultiply);
    out
}

fn premultiply(px: &mut Rgba<u8>) {
    let a = u32::from(px[3]);
    for c in &mut px.0[..3] {
        *c = ((u32::from(*c) * a + 127) / 255) as u8;
    }
}

fn demultiply(px: &mut Rgba<u8>) {
    let a = u32::from(px[3]);
    if a == 0 {
        *px = CLEAR;
        return;
    }
    for c in &mut px.0[..3] {
        *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
    }
}

/// Alpha-composites `fg` centred onto an opaque white `size`x`size` canvas.
pub fn on_white(fg: &RgbaImage, size: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size, size, WHITE);
    let x = centre_offset(size, fg.width());
    let y = centre_offset(size, fg.height());
    imageops::overlay(&mut canvas, fg, i64::from(x), i64::from(y));
    canvas
}

/// Clears every pixel whose centre lies outside the circle inscribed in the
/// image; pixels inside are left untouched.
pub fn circle_mask(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    let cx = f64::from(w) / 2.0;
    let cy = f64::from(h) / 2.0;
    let r = cx.min(cy);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - cx;
        let dy = f64::from(y) + 0.5 - cy;
        if dx * dx + dy * dy > r * r {
            *px = CLEAR;
        }
    }
}

/// Drops the alpha channel after compositing over white.
pub fn flatten_rgb(img: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        let over_white = |c: u8| {
            let c = u32::from(c) * u32::from(a) + 255 * (255 - u32::from(a));
            ((c + 127) / 255) as u8
        };
        Rgb([over_white(r), over_white(g), over_white(b)])
    })
}
