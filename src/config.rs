//! Configuration loader and schema types.
//!
//! Settings drive the front-end, the file store and logging; the playlist
//! core itself takes no configuration.

mod load;
mod schema;

pub use load::{CONFIG_PATH_ENV, default_config_path, resolve_config_path};
pub use schema::*;

pub use ::config::ConfigError;

#[cfg(test)]
mod tests;
