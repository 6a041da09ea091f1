//! Resolve command.

use anyhow::Result;
use lurl_core::BaseContext;

pub fn run_resolve(base: &BaseContext, from: &str, to: &str) -> Result<()> {
    println!("{}", base.resolve(from, to)?);
    Ok(())
}
