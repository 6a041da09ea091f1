pub mod config;
pub mod logging;

// URL value model and the parse/format/resolve triad
pub mod base;
pub mod error;
pub mod query;
pub mod url_model;

pub use base::BaseContext;
pub use error::MalformedUrl;
pub use query::{QueryMap, QueryValue};
pub use url_model::{format, parse, resolve, UrlQuery, UrlValue};
