mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config};
pub use types::{FrameStyle, GraphConfig, LogsConfig, SporelogConfig};
