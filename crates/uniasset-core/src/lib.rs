pub mod config;
pub mod logging;

pub mod checksum;
pub mod icons;
pub mod logo_map;
pub mod storage;
