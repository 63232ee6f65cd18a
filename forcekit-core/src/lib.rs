mod args;
mod as_value;
mod client;
mod config;
mod error;
mod picklist;
mod query;
mod record;
mod safe_string;
mod soql_writer;
mod template;
mod util;
mod value;
mod writer;

pub use ::anyhow::Context;
pub use args::*;
pub use as_value::*;
pub use client::*;
pub use config::*;
pub use error::*;
pub use picklist::*;
pub use query::*;
pub use record::*;
pub use safe_string::*;
pub use soql_writer::*;
pub use template::*;
pub use util::*;
pub use value::*;
pub use writer::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
