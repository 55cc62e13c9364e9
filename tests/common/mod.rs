//! Test infrastructure shared by the integration tests.
//!
//! [`FakeSpotify`] is an in-process stand-in for both the Spotify accounts
//! service and the Web API. Tests point a [`spotlist::config::Config`] at it
//! and inspect what it received afterwards.

#![allow(dead_code)]

mod server;

pub use server::*;
