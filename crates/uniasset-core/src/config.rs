use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default CSV input, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "universities DATA.csv";
/// Default TypeScript output, relative to the working directory.
pub const DEFAULT_MAP_OUTPUT: &str = "university_logos_complete.ts";

/// Input/output locations for the logo map generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoMapConfig {
    /// CSV with `university_name` and `logo_url` columns.
    pub csv_path: PathBuf,
    /// Generated TypeScript module; overwritten on every run.
    pub output_path: PathBuf,
}

impl Default for LogoMapConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            output_path: PathBuf::from(DEFAULT_MAP_OUTPUT),
        }
    }
}

/// Icon generator settings (optional section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconsConfig {
    /// App project root holding `src/assets`, `android/` and `store-listing/`.
    /// None = current working directory.
    #[serde(default)]
    pub project_root: Option<PathBuf>,
}

/// Global configuration loaded from `~/.config/uniasset/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniassetConfig {
    #[serde(default)]
    pub logo_map: LogoMapConfig,
    #[serde(default)]
    pub icons: IconsConfig,
}

pub const CONFIG_FILE: &str = "config.toml";

/// The user's existing `config.toml`, if there is one. Never creates directories.
pub fn config_path() -> Option<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uniasset").ok()?;
    xdg_dirs.find_config_file(CONFIG_FILE)
}

/// Parse a config file. Missing sections and fields take their defaults.
pub fn load_from(path: &Path) -> Result<UniassetConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))
}

/// Load `<dir>/config.toml`, or the defaults when the file does not exist
/// (including when `dir` is missing or not a directory).
pub fn load_in(dir: &Path) -> Result<UniassetConfig> {
    let path = dir.join(CONFIG_FILE);
    if path.is_file() {
        load_from(&path)
    } else {
        Ok(UniassetConfig::default())
    }
}

/// Load the user's config if present, otherwise the built-in defaults.
/// Nothing is written.
pub fn load_or_default() -> Result<UniassetConfig> {
    match config_path() {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            load_from(&path)
        }
        None => Ok(UniassetConfig::default()),
    }
}

/// Write the default config to `path`; refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("config {} already exists", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let toml = toml::to_string_pretty(&UniassetConfig::default())?;
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(())
}

/// Create `$XDG_CONFIG_HOME/uniasset/config.toml` with the defaults.
pub fn init_user_config() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uniasset")
        .context("locate XDG config directory")?;
    let path = xdg_dirs
        .place_config_file(CONFIG_FILE)
        .context("create XDG config directory")?;
    write_default(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UniassetConfig::default();
        assert_eq!(cfg.logo_map.csv_path, PathBuf::from("universities DATA.csv"));
        assert_eq!(
            cfg.logo_map.output_path,
            PathBuf::from("university_logos_complete.ts")
        );
        assert!(cfg.icons.project_root.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UniassetConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UniassetConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.logo_map.csv_path, cfg.logo_map.csv_path);
        assert_eq!(parsed.logo_map.output_path, cfg.logo_map.output_path);
        assert_eq!(parsed.icons.project_root, cfg.icons.project_root);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: UniassetConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.logo_map.csv_path, PathBuf::from(DEFAULT_CSV_PATH));
        assert!(cfg.icons.project_root.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            [logo_map]
            csv_path = "data/unis.csv"
            output_path = "app/src/constants/logos.ts"

            [icons]
            project_root = "/work/pakuni"
        "#;
        let cfg: UniassetConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.logo_map.csv_path, PathBuf::from("data/unis.csv"));
        assert_eq!(
            cfg.logo_map.output_path,
            PathBuf::from("app/src/constants/logos.ts")
        );
        assert_eq!(
            cfg.icons.project_root.as_deref(),
            Some(std::path::Path::new("/work/pakuni"))
        );
    }

    #[test]
    fn load_in_missing_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_in(&dir.path().join("absent")).unwrap();
        assert_eq!(cfg.logo_map.csv_path, PathBuf::from(DEFAULT_CSV_PATH));
    }

    #[test]
    fn load_in_dir_that_is_a_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("config-home");
        fs::write(&not_a_dir, b"plain file").unwrap();
        let cfg = load_in(&not_a_dir).unwrap();
        assert_eq!(cfg.logo_map.output_path, PathBuf::from(DEFAULT_MAP_OUTPUT));
    }

    #[test]
    fn malformed_config_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "garbage = [").unwrap();
        let err = load_in(dir.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("parse config"), "{msg}");
        assert!(msg.contains(CONFIG_FILE), "{msg}");
    }

    #[test]
    fn write_default_then_load_and_no_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uniasset").join(CONFIG_FILE);
        write_default(&path).unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.logo_map.csv_path, PathBuf::from(DEFAULT_CSV_PATH));
        assert!(write_default(&path).is_err());
    }
}
