//! Parse command: print URL components as JSON.

use anyhow::Result;
use lurl_core::BaseContext;

/// Parse `url` against `base` and print the value as pretty JSON.
pub fn run_parse(base: &BaseContext, url: &str) -> Result<()> {
    let value = base.parse(url)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
