//! CLI command handlers, one per file.

mod checksum;
pub(super) mod icons;
mod init_config;
pub(super) mod logo_map;

pub use checksum::run_checksum;
pub use icons::{resolve_root, run_icons};
pub use init_config::run_init_config;
pub use logo_map::{resolve_map_options, run_logo_map};
