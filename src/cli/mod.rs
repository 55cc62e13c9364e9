//! # CLI Module
//!
//! Command implementations behind the `spotlist` binary. Each command takes
//! the [`Config`](crate::config::Config) built once in `main` and sequences
//! the Spotify operations:
//!
//! - [`run`] - read a track list, refresh the access token, resolve the
//!   tracks, create the playlist and fill it
//! - [`resolve`] - the same up to and including resolution, without touching
//!   any playlist
//! - [`authorize`] - print (and try to open) the one-time authorization URL
//! - [`exchange`] - turn the authorization code into a refresh token
//!
//! Commands report progress with the crate's console macros and stop the
//! process through `error!` when a step the rest of the pipeline depends on
//! fails.

mod auth;
mod resolve;
mod run;

pub use auth::authorize;
pub use auth::exchange;
pub use resolve::resolve;
pub use run::run;
