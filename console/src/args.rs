//! Command-line flags shared by every menu binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::{ConsoleConfig, resolve_config};
use crate::menu::LoopOptions;

/// Flatten into a binary's `Parser` with `#[command(flatten)]`.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// TOML settings file. Missing file means defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not wait for Enter after each command.
    #[arg(long)]
    pub no_pause: bool,
}

impl SessionArgs {
    pub fn load_config(&self) -> Result<ConsoleConfig> {
        resolve_config(self.config.as_deref())
    }

    /// `--no-pause` wins over the config file.
    pub fn loop_options(&self, cfg: &ConsoleConfig) -> LoopOptions {
        LoopOptions {
            pause: cfg.pause_after_command && !self.no_pause,
        }
    }
}
