//! # Spotify Integration Module
//!
//! Thin client for the handful of Spotify endpoints spotlist needs. Every
//! function takes the [`Config`](crate::config::Config) built at startup and,
//! where the endpoint requires it, the run's [`AccessToken`](crate::types::AccessToken).
//!
//! ## Layout
//!
//! ```text
//! cli::run
//!    ↓
//! auth      token refresh, authorization-code helpers
//! search    per-track search and the resolver
//! playlist  create + populate
//!    ↓
//! http      GET / POST helpers, status reporting
//!    ↓
//! Spotify Web API / Accounts service
//! ```
//!
//! ## Endpoints
//!
//! - `POST /api/token` (accounts) - refresh token and authorization-code grants
//! - `GET /search?type=track&limit=1` - track lookup, first result only
//! - `POST /users/{user_id}/playlists` - create a private playlist
//! - `POST /users/{user_id}/playlists/{playlist_id}/tracks` - add tracks
//!
//! ## Error Handling
//!
//! Nothing in here retries. The [`http`] helpers report non-success statuses
//! and hand the response back; each operation then decides:
//!
//! - token refresh fails with [`ApiError`](crate::error::ApiError), and the
//!   caller stops the run
//! - a failed search is recorded as a failed request and resolution carries on
//! - playlist creation and population return `Err` on anything but `201`
//!
//! All calls run one after another; the async API only reflects the HTTP
//! stack underneath.

pub mod auth;
pub mod http;
pub mod playlist;
pub mod search;
