//! The fixed set of raster outputs.

use std::path::PathBuf;

use super::layout::IconLayout;

/// Full logo with wordmark, for splash and about screens.
pub const LOGO_WIDTH: u32 = 400;
pub const LOGO_HEIGHT: u32 = 520;
/// Edge of the square icon, round icon and store icon.
pub const ICON_SIZE: u32 = 512;
/// Icon render placed inside the 512 round icon.
pub const ROUND_INNER: u32 = 400;
/// The `ROUND_INNER` render is resampled to this for the store icon.
pub const STORE_INNER: u32 = 420;
/// Launcher foreground edge as a percentage of the bucket edge.
pub const LAUNCHER_INNER_PERCENT: u32 = 78;

pub const LAUNCHER_FILE: &str = "ic_launcher.png";
pub const LAUNCHER_ROUND_FILE: &str = "ic_launcher_round.png";

/// SVG inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorSource {
    /// Logo with text.
    Logo,
    /// Icon only.
    Icon,
}

impl VectorSource {
    pub fn file_name(self) -> &'static str {
        match self {
            VectorSource::Logo => "pakuni-logo.svg",
            VectorSource::Icon => "pakuni-icon.svg",
        }
    }
}

/// Android launcher density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityBucket {
    pub dir: &'static str,
    pub size: u32,
}

impl DensityBucket {
    /// Edge of the icon render placed on the bucket's canvas.
    pub fn inner_size(self) -> u32 {
        self.size * LAUNCHER_INNER_PERCENT / 100
    }
}

pub const DENSITY_BUCKETS: [DensityBucket; 5] = [
    DensityBucket { dir: "mipmap-mdpi", size: 48 },
    DensityBucket { dir: "mipmap-hdpi", size: 72 },
    DensityBucket { dir: "mipmap-xhdpi", size: 96 },
    DensityBucket { dir: "mipmap-xxhdpi", size: 144 },
    DensityBucket { dir: "mipmap-xxxhdpi", size: 192 },
];

/// Treatment of the canvas outside the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Opaque white square, written without an alpha channel.
    WhiteSquare,
    /// Opaque white disc inscribed in the canvas, transparent corners.
    WhiteCircle,
}

/// How a target's pixels are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compose {
    /// Render the source straight into the canvas, transparent background.
    Plain,
    /// Render the source at `render` px, resample to `inner` px if different,
    /// centre it on the canvas over `backdrop`.
    Centred {
        render: u32,
        inner: u32,
        backdrop: Backdrop,
    },
}

/// One output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterTarget {
    pub path: PathBuf,
    pub source: VectorSource,
    pub width: u32,
    pub height: u32,
    pub compose: Compose,
}

impl RasterTarget {
    /// True if the PNG is written as RGB.
    pub fn is_opaque(&self) -> bool {
        matches!(
            self.compose,
            Compose::Centred {
                backdrop: Backdrop::WhiteSquare,
                ..
            }
        )
    }
}

/// Every output in generation order: logo, icon, round icon, store icon,
/// then square and round launcher icons per density bucket.
pub fn plan(layout: &IconLayout) -> Vec<RasterTarget> {
    let mut targets = vec![
        RasterTarget {
            path: layout.images_dir.join("pakuni-logo.png"),
            source: VectorSource::Logo,
            width: LOGO_WIDTH,
            height: LOGO_HEIGHT,
            compose: Compose::Plain,
        },
        RasterTarget {
            path: layout.images_dir.join("pakuni-icon.png"),
            source: VectorSource::Icon,
            width: ICON_SIZE,
            height: ICON_SIZE,
            compose: Compose::Plain,
        },
        RasterTarget {
            path: layout.images_dir.join("pakuni-icon-round.png"),
            source: VectorSource::Icon,
            width: ICON_SIZE,
            height: ICON_SIZE,
            compose: Compose::Centred {
                render: ROUND_INNER,
                inner: ROUND_INNER,
                backdrop: Backdrop::WhiteCircle,
            },
        },
        RasterTarget {
            path: layout.store_dir.join("icon-512.png"),
            source: VectorSource::Icon,
            width: ICON_SIZE,
            height: ICON_SIZE,
            compose: Compose::Centred {
                render: ROUND_INNER,
                inner: STORE_INNER,
                backdrop: Backdrop::WhiteSquare,
            },
        },
    ];

    for bucket in DENSITY_BUCKETS {
        let dir = layout.android_res_dir.join(bucket.dir);
        let inner = bucket.inner_size();
        for (file, backdrop) in [
            (LAUNCHER_FILE, Backdrop::WhiteSquare),
            (LAUNCHER_ROUND_FILE, Backdrop::WhiteCircle),
        ] {
            targets.push(RasterTarget {
                path: dir.join(file),
                source: VectorSource::Icon,
                width: bucket.size,
                height: bucket.size,
                compose: Compose::Centred {
                    render: inner,
                    inner,
                    backdrop,
                },
            });
        }
    }
    targets
}
