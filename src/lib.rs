pub mod config;
pub mod pipeline;

pub use config::{Config, ConfigError};
pub use pipeline::{build, import_and_export, ImportRun};
