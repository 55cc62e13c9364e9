use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One (artist, track) pair to look up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRequest {
    pub artist: String,
    pub track: String,
}

impl TrackRequest {
    pub fn new(artist: impl Into<String>, track: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            track: track.into(),
        }
    }
}

/// A track list handed over by the extraction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackList {
    pub title: String,
    pub tracks: Vec<TrackRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumInfo {
    pub album_id: String,
    pub album_name: String,
    pub album_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistInfo {
    pub artist_id: String,
    pub artist_name: String,
    pub artist_url: String,
}

/// A request matched to a catalog track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTrack {
    pub track_id: String,
    pub track_name: String,
    pub track_uri: String,
    pub track_url: String,
    pub album: AlbumInfo,
    pub artist: ArtistInfo,
}

/// A request whose search call itself failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedRequest {
    pub request: TrackRequest,
    pub reason: String,
}

/// Outcome of resolving a whole track list.
///
/// Every input request ends up in exactly one of `tracks` (through its
/// matched id), `unresolved` or `failed`. `order` lists each id in `tracks`
/// once, at the position of the first request that matched it.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub tracks: HashMap<String, ResolvedTrack>,
    pub order: Vec<String>,
    pub unresolved: Vec<TrackRequest>,
    pub failed: Vec<FailedRequest>,
}

impl Resolution {
    /// Records a match. A later match for the same id replaces the earlier
    /// data but keeps the earlier position.
    pub fn insert(&mut self, track: ResolvedTrack) {
        if !self.tracks.contains_key(&track.track_id) {
            self.order.push(track.track_id.clone());
        }
        self.tracks.insert(track.track_id.clone(), track);
    }

    /// Track URIs in playlist order.
    pub fn uris(&self) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|id| self.tracks.get(id))
            .map(|t| t.track_uri.clone())
            .collect()
    }

    /// Whether resolving wrote at least one result file. Failed searches
    /// are only reported, never written.
    pub fn has_output(&self) -> bool {
        !self.tracks.is_empty() || !self.unresolved.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.unresolved.is_empty() && self.failed.is_empty()
    }
}

/// Short-lived bearer credential. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Token pair obtained from an authorization code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub artist: String,
    pub track: String,
}

#[derive(Tabled)]
pub struct FailedTableRow {
    pub artist: String,
    pub track: String,
    pub reason: String,
}

// Spotify Web API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub items: Vec<SearchTrack>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub album: SearchAlbum,
    #[serde(default)]
    pub artists: Vec<SearchArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAlbum {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl From<SearchTrack> for ResolvedTrack {
    fn from(t: SearchTrack) -> Self {
        let artist = t
            .artists
            .into_iter()
            .next()
            .map(|a| ArtistInfo {
                artist_id: a.id,
                artist_name: a.name,
                artist_url: a.external_urls.spotify,
            })
            .unwrap_or_default();

        ResolvedTrack {
            track_id: t.id,
            track_name: t.name,
            track_uri: t.uri,
            track_url: t.external_urls.spotify,
            album: AlbumInfo {
                album_id: t.album.id,
                album_name: t.album.name,
                album_url: t.album.external_urls.spotify,
            },
            artist,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}
