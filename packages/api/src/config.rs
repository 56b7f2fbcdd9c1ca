//! Configuration loading from the environment.
//!
//! Native builds read `.env` via `dotenvy`, then an optional TOML file named by
//! `AROUND_CONFIG`, then the `AROUND_API_URL` / `AROUND_API_TOKEN` overrides.
//! WASM builds have no process environment, so the same two overrides are captured
//! at compile time.

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use std::{io, path::PathBuf};

use store::AroundConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {0:?}: {1}")]
    Read(PathBuf, io::Error),
    #[error("cannot parse config file {0:?}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

/// Load the effective configuration for this platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<AroundConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let config = match std::env::var("AROUND_CONFIG") {
        Ok(path) => read_file(Path::new(&path))?,
        Err(_) => AroundConfig::default(),
    };

    Ok(apply_overrides(
        config,
        std::env::var("AROUND_API_URL").ok(),
        std::env::var("AROUND_API_TOKEN").ok(),
    ))
}

/// Load the effective configuration for this platform.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<AroundConfig, ConfigError> {
    Ok(apply_overrides(
        AroundConfig::default(),
        option_env!("AROUND_API_URL").map(String::from),
        option_env!("AROUND_API_TOKEN").map(String::from),
    ))
}

/// Read and parse an `around.toml` file.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_file(path: &Path) -> Result<AroundConfig, ConfigError> {
    let text =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    AroundConfig::from_toml(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

/// Apply environment overrides on top of a file-based config. Empty values are ignored.
pub fn apply_overrides(
    mut config: AroundConfig,
    base_url: Option<String>,
    token: Option<String>,
) -> AroundConfig {
    if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
        config.api.base_url = base_url;
    }
    if let Some(token) = token.filter(|token| !token.is_empty()) {
        config.api.token = Some(token);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let file = AroundConfig::default().with_api("http://file", Some("file-token".to_string()));
        let config = apply_overrides(
            file,
            Some("http://env".to_string()),
            Some("env-token".to_string()),
        );
        assert_eq!(config.api.base_url, "http://env");
        assert_eq!(config.api.token.as_deref(), Some("env-token"));
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let file = AroundConfig::default().with_api("http://file", Some("file-token".to_string()));
        let config = apply_overrides(file.clone(), Some("  ".to_string()), Some(String::new()));
        assert_eq!(config, file);

        assert_eq!(apply_overrides(file.clone(), None, None), file);
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(AroundConfig::filename());
        std::fs::write(
            &path,
            "[api]\nbase_url = \"http://localhost:3000\"\n\n[popups]\npreview_close_delay_ms = 100\n",
        )
        .unwrap();

        let config = read_file(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.popups.preview_close_delay_ms, 100);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(..)));
    }

    #[test]
    fn test_read_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(AroundConfig::filename());
        std::fs::write(&path, "[popups]\npreview_close_delay_ms = \"soon\"\n").unwrap();

        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(..)));
    }
}
