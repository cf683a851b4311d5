use crate::conf::{ConfigError, SporelogConfig};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "sporelog.toml";

/// Loads the config file.
///
/// With an explicit `path` the file must exist. Without one,
/// [`DEFAULT_CONFIG_FILE`] is used when present and built-in defaults
/// otherwise.
pub fn load_config(path: Option<&Path>) -> Result<SporelogConfig, ConfigError> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                debug!("no config file, using defaults");
                return Ok(SporelogConfig::default());
            }
            default
        }
    };

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: SporelogConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    cfg.validate()?;

    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}
