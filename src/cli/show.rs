//! Show and section command implementations

use anyhow::Result;
use clap::Args;

use super::utils::{LoadOptions, StoreArgs};

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct SectionArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Section name or dotted path (e.g. database, services.api)
    #[arg(value_name = "SECTION")]
    pub section: String,
}

pub fn run_show(args: ShowArgs, options: &LoadOptions) -> Result<()> {
    let store = args.store.load(options)?;
    print!("{}", store);
    Ok(())
}

pub fn run_section(args: SectionArgs, options: &LoadOptions) -> Result<()> {
    let store = args.store.load(options)?;
    store.display_section(&args.section)?;
    Ok(())
}
