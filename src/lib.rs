//! Spotify playlist builder library
//!
//! This library turns a list of (artist, track) pairs into a private Spotify
//! playlist. It resolves each pair through the Spotify search API, records the
//! matches and misses as JSON files, creates a playlist and fills it with the
//! matched tracks.
//!
//! # Modules
//!
//! - `cli` - Command implementations sequencing the pipeline
//! - `config` - Configuration loaded once from the environment
//! - `error` - Error types for API, input and output failures
//! - `management` - Persistence of resolution results
//! - `source` - Reading track lists from input files
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Query building and other helpers
//!
//! # Example
//!
//! ```
//! use spotlist::{config, spotify};
//!
//! #[tokio::main]
//! async fn main() -> spotlist::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env();
//!     let token = spotify::auth::refresh_access_token(&config).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod source;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the outer edges of the application (command implementations and
/// configuration loading) where the concrete error type is not interesting
/// to the caller. Library operations return their own error enums.
///
/// # Example
///
/// ```
/// use spotlist::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Resolving {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line prefixed with a green check mark.
///
/// ```
/// success!("{} tracks identified", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and terminates the process with exit code 1.
///
/// Reserved for the command layer: library code reports failures through
/// its return values and `warning!`, never by exiting.
///
/// ```
/// error!("Failed to refresh access token: {}", e);
/// // unreachable
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a diagnostic prefixed with a yellow `!` and keeps going.
///
/// This is how non-success HTTP responses, malformed input lines and
/// failed file writes are reported.
///
/// ```
/// warning!("Search for {} failed with status {}", query, status);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
