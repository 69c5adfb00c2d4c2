//! CLI for the PakUni asset generators.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use uniasset_core::config;
use uniasset_core::logging::{self, Verbosity};

use commands::{
    resolve_map_options, resolve_root, run_checksum, run_icons, run_init_config, run_logo_map,
};

/// Top-level CLI for the asset generators.
#[derive(Debug, Parser)]
#[command(name = "uniasset")]
#[command(about = "Build-time asset generators for the PakUni app", long_about = None)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also append log events to this file.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity {
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate the university logo map (TypeScript) from the CSV sheet.
    LogoMap {
        /// CSV with `university_name` and `logo_url` columns.
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
        /// Output module; overwritten. Its directory must exist.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Render the SVG logo and icon into every app, launcher and store PNG.
    Icons {
        /// App project root (contains src/assets/svg). Defaults to the current directory.
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Compute SHA-256 of a file (e.g. to compare icon reruns).
    Checksum {
        /// Path to the file.
        path: String,
    },

    /// Write a default config.toml to the user config directory.
    InitConfig,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        logging::init(cli.verbosity(), cli.log_file.as_deref())?;

        match cli.command {
            CliCommand::LogoMap { csv, out } => {
                let opts = resolve_map_options(csv, out, config::load_or_default)?;
                run_logo_map(&opts)?;
            }
            CliCommand::Icons { root } => {
                let root = resolve_root(root, config::load_or_default)?;
                run_icons(&root)?;
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
            CliCommand::InitConfig => run_init_config()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
