//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::Dispatch;

use crate::config::{ConfigStore, DocumentFormat};

/// Base name and environment selecting the two layers.
#[derive(Args)]
pub struct StoreArgs {
    /// Base config name (file name without extension)
    #[arg(
        short,
        long,
        value_name = "NAME",
        default_value = "default",
        env = "LAYERED_CONFIG_NAME"
    )]
    pub name: String,

    /// Environment override layered on top (e.g. dev, prod)
    #[arg(short, long, value_name = "ENV", env = "LAYERED_CONFIG_ENV")]
    pub env: Option<String>,
}

/// Global options that apply to every subcommand.
pub struct LoadOptions {
    pub config_dir: Option<PathBuf>,
    pub format: DocumentFormat,
    pub dispatch: Dispatch,
}

impl StoreArgs {
    pub fn load(&self, options: &LoadOptions) -> Result<ConfigStore> {
        let mut builder = ConfigStore::builder(self.name.as_str())
            .environment(self.env.as_deref())
            .format(options.format)
            .logger(options.dispatch.clone());
        if let Some(dir) = &options.config_dir {
            builder = builder.config_dir(dir);
        }
        builder.build().with_context(|| format!("Failed to load configuration '{}'", self.name))
    }
}
