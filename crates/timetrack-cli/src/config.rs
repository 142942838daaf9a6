//! Discovery and parsing of the TOML configuration file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use timetrack::{TimetrackError, config::AppConfig};

/// Looked up relative to the working directory.
const LOCAL_CONFIG: &str = "timetrack/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("configuration file {0} does not exist")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for TimetrackError {
    fn from(err: ConfigError) -> Self {
        TimetrackError::Config(err.to_string())
    }
}

/// Loads the configuration.
///
/// An explicit path must exist. Otherwise the first existing file among
/// `timetrack/config.toml` and `<platform config dir>/config.toml` is used,
/// falling back to the defaults.
///
/// # Errors
///
/// Returns [`TimetrackError::Config`] for a missing explicit file or
/// invalid TOML, and [`TimetrackError::Io`] when a file cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TimetrackError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        info!(path:? = path; "Loading configuration from explicit path");
        return read_config(path);
    }

    for candidate in discovered_paths() {
        if candidate.is_file() {
            info!(path:? = candidate; "Loading configuration");
            return read_config(&candidate);
        }
        debug!(path:? = candidate; "No configuration file here");
    }

    debug!("Using default configuration");
    Ok(AppConfig::default())
}

fn discovered_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "timetrack", "timetrack") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

fn read_config(path: &Path) -> Result<AppConfig, TimetrackError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, &path.display().to_string())
}

fn parse_config(content: &str, origin: &str) -> Result<AppConfig, TimetrackError> {
    toml::from_str(content).map_err(|err| {
        ConfigError::Parse {
            path: origin.to_string(),
            message: err.message().to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
            [layout]
            pixels_per_year = 4.0
            seed = 42

            [render]
            output = "out/timeline.svg"
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.layout().pixels_per_year(), 4.0);
        assert_eq!(config.layout().seed(), Some(42));
        assert_eq!(config.layout().row_spacing(), 25.0);
        assert_eq!(config.storage().data_file(), Path::new("timetrack.json"));
        assert_eq!(config.render().output(), Some(Path::new("out/timeline.svg")));
        assert_eq!(config.style().font_family(), "Arial");
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("[layout\npixels_per_year = ", "broken.toml").unwrap_err();
        match err {
            TimetrackError::Config(message) => assert!(message.contains("broken.toml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_seed_type_is_rejected() {
        let err = parse_config("[layout]\nseed = \"forty-two\"\n", "seed.toml").unwrap_err();
        assert!(matches!(err, TimetrackError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("/definitely/not/here/config.toml")).unwrap_err();
        assert!(matches!(err, TimetrackError::Config(_)));
    }
}
