use std::path::Path;

use crate::{config::Config, error, info, spotify, success, warning};

use super::resolve::{access_token, load_track_list};

pub async fn run(config: &Config, input: &Path, title: Option<String>) {
    let list = load_track_list(input, title).await;
    let token = access_token(config).await;

    let resolution = spotify::search::resolve(config, &list.title, &list.tracks, &token).await;

    if resolution.tracks.is_empty() {
        warning!(
            "No track could be identified, playlist {} was not created",
            list.title
        );
        return;
    }

    info!("Create playlist {}", list.title);
    let playlist = match spotify::playlist::create(config, &list.title, &token).await {
        Ok(playlist) => {
            success!("Playlist {} created", playlist.title);
            playlist
        }
        Err(e) => error!("Failed to create playlist {}: {}", list.title, e),
    };

    info!("Add tracks to playlist {}", playlist.title);
    match spotify::playlist::populate(config, &playlist, &resolution, &token).await {
        Ok(count) => success!("{} tracks added to playlist {}", count, playlist.title),
        Err(e) => error!("Failed to add tracks to playlist {}: {}", playlist.title, e),
    }
}
