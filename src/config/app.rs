//! Application configuration loading.
//!
//! Non-secret settings come from an optional TOML file (default `./config.toml`,
//! overridable with `WISHLIST_CONFIG`). The two role passwords are read from the
//! environment only and never from the file.

use crate::core::auth::Credentials;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Header label served when none has been stored yet.
pub const DEFAULT_HEADER: &str = "Malagapo Christmas Wishlist";

/// Address the HTTP server binds when nothing else is configured.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Non-secret settings, as read from config.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// `host:port` the server listens on
    pub bind_address: String,
    /// Header label used until an admin stores one
    pub default_header: String,
    /// Browser origin allowed by CORS; any origin when unset
    pub allowed_origin: Option<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            default_header: DEFAULT_HEADER.to_string(),
            allowed_origin: None,
        }
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `host:port` the server listens on
    pub bind_address: String,
    /// `SeaORM` connection string
    pub database_url: String,
    /// Header label used until an admin stores one
    pub default_header: String,
    /// Browser origin allowed by CORS; any origin when unset
    pub allowed_origin: Option<String>,
    /// Role passwords
    pub credentials: Credentials,
}

/// Parses a TOML file into [`FileConfig`].
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

fn require_secret(name: &str) -> Result<String> {
    let value = std::env::var(name).map_err(|_| Error::Config {
        message: format!("{name} must be set"),
    })?;
    if value.is_empty() {
        return Err(Error::Config {
            message: format!("{name} must not be empty"),
        });
    }
    Ok(value)
}

/// Loads the complete configuration from the file system and environment.
///
/// A missing config file is not an error; defaults apply. Environment variables
/// `BIND_ADDRESS` and `DATABASE_URL` override the file.
///
/// # Errors
/// Returns an error if the config file exists but is invalid, or if either
/// `WISHLIST_USER_PASSWORD` or `WISHLIST_ADMIN_PASSWORD` is missing or empty.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("WISHLIST_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let file = if Path::new(&path).exists() {
        load_file_config(&path)?
    } else {
        info!("No config file at {path}, using defaults");
        FileConfig::default()
    };

    let credentials = Credentials::new(
        require_secret("WISHLIST_USER_PASSWORD")?,
        require_secret("WISHLIST_ADMIN_PASSWORD")?,
    );

    Ok(AppConfig {
        bind_address: std::env::var("BIND_ADDRESS").unwrap_or(file.bind_address),
        database_url: super::database::get_database_url(),
        default_header: file.default_header,
        allowed_origin: file.allowed_origin,
        credentials,
    })
}
