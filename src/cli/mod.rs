//! CLI module - command-line interface for Fyyur
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Fyyur - venue and artist listings plus a trivia question bank
#[derive(Parser)]
#[command(name = "fyyur")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file, instead of searching the default locations
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Insert demo venues, artists, shows and trivia questions into empty tables
    Seed,

    /// Connect, run migrations and ping the database
    Check,
}

impl Cli {
    /// Config from `--config` when given, otherwise the usual search path.
    /// Environment overrides apply either way.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => {
                let mut config = Config::load_from_path(path)?;
                config.apply_env_overrides();
                Ok(config)
            }
            None => Config::load(),
        }
    }

    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}

pub use commands::*;
