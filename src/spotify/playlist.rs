use reqwest::StatusCode;

use crate::{
    config::Config,
    error::ApiError,
    spotify::http,
    types::{
        AccessToken, AddTrackToPlaylistRequest, CreatePlaylistRequest, CreatePlaylistResponse,
        Playlist, Resolution,
    },
    utils::MAX_TRACKS_PER_REQUEST,
    warning,
};

/// Creates an empty private playlist owned by the configured user.
///
/// Only a `201 Created` response counts as success. Any other status is
/// reported by the transport layer and returned as
/// `ApiError::UnexpectedStatus`, so the caller cannot carry on with a
/// playlist that does not exist.
///
/// # Example
///
/// ```
/// let playlist = create(&config, "Road Trip", &token).await?;
/// println!("Created {}", playlist.id);
/// ```
pub async fn create(
    config: &Config,
    title: &str,
    token: &AccessToken,
) -> Result<Playlist, ApiError> {
    let url = format!(
        "{api}/users/{user}/playlists",
        api = config.api_url,
        user = urlencoding::encode(&config.user_id)
    );

    let body = CreatePlaylistRequest {
        name: title.to_string(),
        public: false,
    };

    let response = http::post_json(&url, token, &body).await?;
    if response.status() != StatusCode::CREATED {
        return Err(http::unexpected(response).await);
    }

    let created = response.json::<CreatePlaylistResponse>().await?;
    if created.id.is_empty() {
        return Err(ApiError::MissingField("id"));
    }

    Ok(Playlist {
        id: created.id,
        title: title.to_string(),
    })
}

/// Adds every resolved track to `playlist` in a single request.
///
/// URIs are sent in resolution order, which follows the input order with
/// duplicates (same track id) removed. Returns the number of tracks sent.
/// Nothing is sent when there are no resolved tracks.
///
/// There is no chunking: Spotify rejects requests with more than
/// [`MAX_TRACKS_PER_REQUEST`] items, and such a rejection is returned as an
/// error like any other non-201 response.
pub async fn populate(
    config: &Config,
    playlist: &Playlist,
    resolution: &Resolution,
    token: &AccessToken,
) -> Result<usize, ApiError> {
    if playlist.id.is_empty() {
        return Err(ApiError::InvalidPlaylist);
    }

    let uris = resolution.uris();
    if uris.is_empty() {
        return Ok(0);
    }

    if uris.len() > MAX_TRACKS_PER_REQUEST {
        warning!(
            "{} tracks exceed the limit of {} per request; Spotify will likely reject them",
            uris.len(),
            MAX_TRACKS_PER_REQUEST
        );
    }

    let url = format!(
        "{api}/users/{user}/playlists/{id}/tracks",
        api = config.api_url,
        user = urlencoding::encode(&config.user_id),
        id = urlencoding::encode(&playlist.id)
    );

    let count = uris.len();
    let body = AddTrackToPlaylistRequest { uris };

    let response = http::post_json(&url, token, &body).await?;
    if response.status() != StatusCode::CREATED {
        return Err(http::unexpected(response).await);
    }

    Ok(count)
}
