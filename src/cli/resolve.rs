use std::path::Path;

use crate::{
    config::Config,
    error, info, source, spotify, success,
    types::{AccessToken, TrackList},
};

pub async fn resolve(config: &Config, input: &Path, title: Option<String>) {
    let list = load_track_list(input, title).await;
    let token = access_token(config).await;

    let resolution = spotify::search::resolve(config, &list.title, &list.tracks, &token).await;
    if resolution.has_output() {
        info!("Results written to {}", config.output_dir.display());
    }
}

pub(crate) async fn load_track_list(input: &Path, title: Option<String>) -> TrackList {
    let mut list = match source::load(input).await {
        Ok(list) => list,
        Err(e) => error!("Cannot read track list {}: {}", input.display(), e),
    };

    if let Some(title) = title {
        list.title = title;
    }

    list
}

pub(crate) async fn access_token(config: &Config) -> AccessToken {
    info!("Refreshing access token...");
    match spotify::auth::refresh_access_token(config).await {
        Ok(token) => {
            success!("Access token refreshed");
            token
        }
        Err(e) => error!(
            "Failed to refresh access token: {}\nCheck SPOTIFY_API_AUTH_CLIENT_ID, SPOTIFY_API_AUTH_CLIENT_SECRET and SPOTIFY_API_REFRESH_TOKEN.",
            e
        ),
    }
}
