//! `uniasset init-config` – write the default config file.

use anyhow::Result;
use uniasset_core::config;

pub fn run_init_config() -> Result<()> {
    let path = config::init_user_config()?;
    println!("Wrote {}", path.display());
    Ok(())
}
