//! Format command: JSON record in, URL string out.

use anyhow::{Context, Result};
use lurl_core::UrlValue;
use std::io::{self, Read};

/// Format a JSON URL record given inline or on stdin (`-`).
pub fn run_format(record: &str) -> Result<()> {
    let json = if record == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading URL record from stdin")?;
        buf
    } else {
        record.to_string()
    };
    println!("{}", format_record(&json)?);
    Ok(())
}

fn format_record(json: &str) -> Result<String> {
    let value: UrlValue = serde_json::from_str(json).context("invalid URL record")?;
    Ok(lurl_core::format(&value))
}
