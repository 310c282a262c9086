//! Check command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{LoadOptions, StoreArgs};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

pub fn run(args: CheckArgs, options: &LoadOptions) -> Result<()> {
    let store = args.store.load(options)?;

    let layers = match store.environment() {
        Some(env) => format!("{} + {}", store.name(), env),
        None => store.name().to_string(),
    };
    println!("OK: {} ({} top-level keys)", layers, store.all().len());
    println!("  Directory: {}", store.config_dir().display());
    println!("  Format: {}", store.format());
    Ok(())
}
