//! Server configuration
//!
//! Sources are layered: built-in defaults, then an optional
//! `quotes-server.{toml,yaml,json}` file, then `QUOTES_*` environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Config file looked up in the working directory (extension optional)
pub const CONFIG_FILE_NAME: &str = "quotes-server";

/// Prefix for environment overrides, e.g. `QUOTES_BIND_ADDRESS`
pub const ENV_PREFIX: &str = "QUOTES";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_DATABASE_PATH: &str = "main.db";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_address: String,
    pub database_path: String,
    pub log_level: String,
    pub max_connections: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Load with `file` as the optional file layer.
    pub fn load_from(file: &Path) -> Result<Self> {
        Self::load_layered(file, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_layered(file: &Path, env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("max_connections", DEFAULT_MAX_CONNECTIONS as i64)?
            .add_source(config::File::from(file).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to build configuration")?;

        settings
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing")).unwrap();

        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!config.database_path.is_empty());
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("quotes-server.toml"),
            "database_path = \"/var/lib/quotes/main.db\"\nmax_connections = 2\n",
        )
        .unwrap();

        let config = Config::load_from(&dir.path().join("quotes-server")).unwrap();
        assert_eq!(config.database_path, "/var/lib/quotes/main.db");
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("quotes-server.toml"),
            "bind_address = \"0.0.0.0:8080\"\nmax_connections = 2\n",
        )
        .unwrap();

        // Explicit variable map so the test never touches the process environment
        let vars: config::Map<String, String> = [
            ("QUOTES_MAX_CONNECTIONS".to_string(), "9".to_string()),
            ("QUOTES_LOG_LEVEL".to_string(), "debug".to_string()),
        ]
        .into_iter()
        .collect();
        let env = config::Environment::with_prefix(ENV_PREFIX).source(Some(vars));

        let config = Config::load_layered(&dir.path().join("quotes-server"), env).unwrap();
        assert_eq!(config.max_connections, 9);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
    }

    #[test]
    fn test_bad_bind_address() {
        let config = Config {
            bind_address: "not-an-address".to_string(),
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            max_connections: 1,
        };
        assert!(config.socket_addr().is_err());
    }
}
