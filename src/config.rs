//! Configuration management for the Spotify catalog exporter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials are never kept in
//! globals: they are read into a [`ClientCredentials`] value by the command
//! that needs them and handed to the Spotify client explicitly.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{error::AuthError, spotify::auth::ClientCredentials};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "US";

const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";

/// Returns the path of the `.env` file inside the local data directory.
///
/// - Linux: `~/.local/share/spotmeta/.env`
/// - macOS: `~/Library/Application Support/spotmeta/.env`
/// - Windows: `%LOCALAPPDATA%/spotmeta/.env`
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotmeta/.env");
    path
}

/// Loads environment variables from the `.env` file in the local data
/// directory.
///
/// Creates the directory if needed. A missing `.env` file is fine: the
/// variables may already be set in the process environment, and commands
/// report missing credentials themselves.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or if an existing
/// `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// use spotmeta::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth token endpoint used for the client-credentials grant.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, falling back to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the default market for artist queries (`SPOTMETA_MARKET`, else `US`).
pub fn default_market() -> String {
    env::var("SPOTMETA_MARKET").unwrap_or_else(|_| DEFAULT_MARKET.to_string())
}

/// Reads the client ID and secret registered on Spotify's developer platform.
///
/// # Errors
///
/// Returns [`AuthError::Config`] naming the first missing variable.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_credentials() -> Result<ClientCredentials, AuthError> {
    let client_id = required(CLIENT_ID_VAR)?;
    let client_secret = required(CLIENT_SECRET_VAR)?;
    Ok(ClientCredentials::new(
        client_id,
        client_secret,
        spotify_apitoken_url(),
    ))
}

fn required(name: &str) -> Result<String, AuthError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AuthError::Config(format!("{} must be set", name))),
    }
}
