//! Where sources live and outputs go, relative to the app project root.

use std::path::{Path, PathBuf};

use super::target::VectorSource;

/// Directory layout of the React Native project the icons are generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    /// `src/assets/svg`: vector sources.
    pub svg_dir: PathBuf,
    /// `src/assets/images`: in-app logo and icon PNGs.
    pub images_dir: PathBuf,
    /// `android/app/src/main/res`: parent of the `mipmap-*` buckets.
    pub android_res_dir: PathBuf,
    /// `store-listing`: Play Store submission assets.
    pub store_dir: PathBuf,
}

impl IconLayout {
    pub fn under(root: &Path) -> Self {
        Self {
            svg_dir: root.join("src").join("assets").join("svg"),
            images_dir: root.join("src").join("assets").join("images"),
            android_res_dir: root.join("android").join("app").join("src").join("main").join("res"),
            store_dir: root.join("store-listing"),
        }
    }

    pub fn source_path(&self, source: VectorSource) -> PathBuf {
        self.svg_dir.join(source.file_name())
    }
}
