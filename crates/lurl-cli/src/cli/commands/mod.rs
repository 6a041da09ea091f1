//! CLI command handlers. Each command is in its own file.

mod format;
mod parse;
mod resolve;

pub use format::run_format;
pub use parse::run_parse;
pub use resolve::run_resolve;
