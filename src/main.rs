//! layered-config: inspect merged configuration documents from the command line

use anyhow::Result;

fn main() -> Result<()> {
    layered_config::cli::run()
}
