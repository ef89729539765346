//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use sphinx_graph::{SphinxGraphError, config::AppConfig};

/// Local configuration path, relative to the working directory.
const LOCAL_CONFIG: &str = "sphinx-graph/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for SphinxGraphError {
    fn from(err: ConfigError) -> Self {
        SphinxGraphError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (sphinx-graph/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SphinxGraphError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "sphinx-graph", "sphinx-graph") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or is not a
/// valid configuration.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SphinxGraphError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().trim_end().to_string(),
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use sphinx_graph::structure::RankDir;

    use super::*;

    #[test]
    fn test_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\nrankdir = \"BT\"\n\n[style]\nevent_color = \"pink\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.graph().rankdir(), RankDir::BottomToTop);
        assert_eq!(config.style().event_color(), "pink");
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();

        match err {
            SphinxGraphError::Config(msg) => {
                assert!(msg.starts_with("Missing configuration file:"));
            }
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style]\nfont = \"serif\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();

        match err {
            SphinxGraphError::Config(msg) => {
                assert!(msg.starts_with("Failed to parse TOML configuration"));
            }
            other => panic!("Expected config error, got {other:?}"),
        }
    }
}
