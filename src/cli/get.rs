//! Get command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{LoadOptions, StoreArgs};

#[derive(Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Top-level key or dotted key path (e.g. database.host)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Print the value as pretty JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GetArgs, options: &LoadOptions) -> Result<()> {
    let store = args.store.load(options)?;
    let value = store.require(&args.key)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}
