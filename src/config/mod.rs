//! Configuration management module
//!
//! Upstream URLs and listen address come from a JSON file, timeouts and
//! logging options from environment variables.

pub mod file;
pub mod settings;

pub use file::{AppConfig, ServerConfig, UrlsConfig};
pub use settings::Settings;
