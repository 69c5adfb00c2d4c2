//! Output file lifecycle.
//!
//! Every generated file is written to `<name>.part` first and renamed into
//! place; a file under its final name is always complete. Stray `.part`
//! files are swept at the end of an icon run.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `icon.png` → `icon.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `bytes` to `final_path` via its temp path, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_atomic(final_path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_path(final_path);
    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, final_path)
}

/// Delete every `*.part` file directly inside `dir`. Returns the removed paths.
///
/// A missing directory is not an error.
pub fn sweep_temp_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let mut removed = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_temp = path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.ends_with(TEMP_SUFFIX));
        if is_temp && path.is_file() {
            fs::remove_file(&path)?;
            removed.push(path);
        }
    }
    Ok(removed)
}
