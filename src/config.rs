//! Configuration management for spotlist.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. They are read exactly once, at startup, into a [`Config`] that is
//! then passed by reference to every component that talks to Spotify.
//!
//! Lookup order:
//! 1. Environment variables already set in the process (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`spotlist/.env`)
//! 4. Built-in defaults for endpoints and the output directory

use std::{env, path::PathBuf};

use crate::Res;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost/";
pub const DEFAULT_SCOPE: &str = "user-read-private playlist-modify-private";
pub const DEFAULT_OUTPUT_DIR: &str = "./json";

/// Loads environment variables from `.env` files.
///
/// The working directory file is loaded first so that it wins over the one in
/// the platform-specific local data directory:
/// - Linux: `~/.local/share/spotlist/.env`
/// - macOS: `~/Library/Application Support/spotlist/.env`
/// - Windows: `%LOCALAPPDATA%/spotlist/.env`
///
/// `dotenv` never overrides variables that are already set, so the process
/// environment always takes precedence. Missing files are not an error.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created, or if a `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Res<()> {
    let cwd_env = PathBuf::from(".env");
    if cwd_env.is_file() {
        dotenv::from_path(&cwd_env)?;
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }

    Ok(())
}

/// Runtime configuration for one invocation.
///
/// Credentials are deliberately not validated here: a missing client id or
/// refresh token surfaces as an authentication failure from Spotify.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub user_id: String,
    pub api_url: String,
    pub token_url: String,
    pub auth_url: String,
    pub redirect_uri: String,
    pub scope: String,
    pub output_dir: PathBuf,
}

impl Config {
    /// Reads every setting from the process environment.
    ///
    /// Call [`load_env`] first if `.env` files should be taken into account.
    pub fn from_env() -> Self {
        Self {
            client_id: var_or("SPOTIFY_API_AUTH_CLIENT_ID", ""),
            client_secret: var_or("SPOTIFY_API_AUTH_CLIENT_SECRET", ""),
            refresh_token: var_or("SPOTIFY_API_REFRESH_TOKEN", ""),
            user_id: var_or("SPOTIFY_USER_ID", ""),
            api_url: trim_url(var_or("SPOTIFY_API_URL", DEFAULT_API_URL)),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            redirect_uri: var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            scope: var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            output_dir: PathBuf::from(var_or("SPOTLIST_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
        }
    }

    /// Returns a copy pointing every endpoint at `base`.
    ///
    /// `base` stands in for both `https://api.spotify.com` and
    /// `https://accounts.spotify.com`, which is what a local fake server needs.
    pub fn with_base_url(&self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api_url: format!("{base}/v1"),
            token_url: format!("{base}/api/token"),
            auth_url: format!("{base}/authorize"),
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
