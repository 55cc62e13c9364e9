use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Form, Path as UrlPath, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};
use spotlist::config::{Config, DEFAULT_REDIRECT_URI, DEFAULT_SCOPE};
use tokio::{net::TcpListener, sync::oneshot};

pub const CLIENT_ID: &str = "client";
pub const CLIENT_SECRET: &str = "secret";
pub const VALID_REFRESH_TOKEN: &str = "valid-refresh";
pub const ACCESS_TOKEN: &str = "test-access";
pub const AUTH_CODE: &str = "good-code";
pub const NEW_REFRESH_TOKEN: &str = "new-refresh";
pub const USER_ID: &str = "tester";
pub const PLAYLIST_ID: &str = "pl-1";

/// How the fake answers the playlist endpoints.
#[derive(Clone)]
pub struct Behaviour {
    pub create_status: StatusCode,
    pub add_status: StatusCode,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            create_status: StatusCode::CREATED,
            add_status: StatusCode::CREATED,
        }
    }
}

/// Everything the fake was sent.
#[derive(Default, Debug)]
pub struct Recorded {
    pub token_forms: Vec<HashMap<String, String>>,
    pub token_auth_headers: Vec<String>,
    pub search_queries: Vec<String>,
    pub created: Vec<(String, Value)>,
    pub added: Vec<(String, String, Vec<String>)>,
}

struct FakeState {
    behaviour: Behaviour,
    recorded: Mutex<Recorded>,
}

type Shared = Arc<FakeState>;

/// Spotify look-alike listening on a random local port.
///
/// Search results are keyed on the artist named in the query:
///
/// | artist contains | answer |
/// |---|---|
/// | `Daft Punk` | two items, `abc123` first |
/// | `Justice` | `def456` |
/// | `Guns` | `gnr001` |
/// | `NoUri` | one item with an empty `uri` |
/// | `Broken` | `500 Internal Server Error` |
/// | anything else | zero items |
///
/// The server shuts down when the value is dropped.
pub struct FakeSpotify {
    pub base_url: String,
    state: Shared,
    _shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeSpotify {
    pub async fn spawn() -> Self {
        Self::spawn_with(Behaviour::default()).await
    }

    pub async fn spawn_with(behaviour: Behaviour) -> Self {
        let state = Arc::new(FakeState {
            behaviour,
            recorded: Mutex::new(Recorded::default()),
        });

        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/search", get(search))
            .route("/v1/users/{user}/playlists", post(create_playlist))
            .route("/v1/users/{user}/playlists/{id}/tracks", post(add_tracks))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Fake Spotify server failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// A configuration with valid credentials pointing at this server.
    pub fn config(&self, output_dir: &Path) -> Config {
        config_for(&self.base_url, output_dir)
    }

    pub fn recorded<T>(&self, f: impl FnOnce(&Recorded) -> T) -> T {
        let recorded = self.state.recorded.lock().expect("poisoned");
        f(&recorded)
    }
}

/// A configuration with valid credentials pointing at `base_url`.
pub fn config_for(base_url: &str, output_dir: &Path) -> Config {
    Config {
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        refresh_token: VALID_REFRESH_TOKEN.to_string(),
        user_id: USER_ID.to_string(),
        api_url: String::new(),
        token_url: String::new(),
        auth_url: String::new(),
        redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
        scope: DEFAULT_SCOPE.to_string(),
        output_dir: output_dir.to_path_buf(),
    }
    .with_base_url(base_url)
}

fn track_json(id: &str, name: &str, artist: &str, uri: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "uri": uri,
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{id}") },
        "album": {
            "id": format!("album-{id}"),
            "name": format!("{name} (Album)"),
            "external_urls": { "spotify": format!("https://open.spotify.com/album/album-{id}") }
        },
        "artists": [{
            "id": format!("artist-{id}"),
            "name": artist,
            "external_urls": { "spotify": format!("https://open.spotify.com/artist/artist-{id}") }
        }]
    })
}

fn search_page(items: Vec<Value>) -> Json<Value> {
    let total = items.len();
    Json(json!({ "tracks": { "total": total, "items": items } }))
}

async fn token(
    State(state): State<Shared>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    {
        let mut recorded = state.recorded.lock().expect("poisoned");
        recorded.token_forms.push(form.clone());
        if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
            recorded.token_auth_headers.push(value.to_string());
        }
    }

    let grant = form.get("grant_type").map(String::as_str);
    match grant {
        Some("refresh_token")
            if form.get("refresh_token").map(String::as_str) == Some(VALID_REFRESH_TOKEN) =>
        {
            (
                StatusCode::OK,
                Json(json!({
                    "access_token": ACCESS_TOKEN,
                    "token_type": "Bearer",
                    "expires_in": 3600
                })),
            )
        }
        Some("authorization_code") if form.get("code").map(String::as_str) == Some(AUTH_CODE) => (
            StatusCode::OK,
            Json(json!({
                "access_token": ACCESS_TOKEN,
                "refresh_token": NEW_REFRESH_TOKEN,
                "scope": "playlist-modify-private",
                "expires_in": 3600
            })),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        ),
    }
}

async fn search(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let bearer = format!("Bearer {ACCESS_TOKEN}");
    if headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(bearer.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
        );
    }

    let q = params.get("q").cloned().unwrap_or_default();
    state
        .recorded
        .lock()
        .expect("poisoned")
        .search_queries
        .push(q.clone());

    let artist = q.split("track:").next().unwrap_or_default().to_string();

    if artist.contains("Broken") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "status": 500, "message": "Server error" } })),
        );
    }

    let items = if artist.contains("Daft Punk") {
        vec![
            track_json("abc123", "One More Time", "Daft Punk", "spotify:track:abc123"),
            track_json("zzz999", "One More Time (Live)", "Daft Punk", "spotify:track:zzz999"),
        ]
    } else if artist.contains("Justice") {
        vec![track_json("def456", "D.A.N.C.E.", "Justice", "spotify:track:def456")]
    } else if artist.contains("Guns") {
        vec![track_json("gnr001", "Patience", "Guns N' Roses", "spotify:track:gnr001")]
    } else if artist.contains("NoUri") {
        vec![track_json("nouri1", "Ghost", "NoUri", "")]
    } else {
        Vec::new()
    };

    (StatusCode::OK, search_page(items))
}

async fn create_playlist(
    State(state): State<Shared>,
    UrlPath(user): UrlPath<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .recorded
        .lock()
        .expect("poisoned")
        .created
        .push((user, body.clone()));

    let status = state.behaviour.create_status;
    if status == StatusCode::CREATED {
        (
            status,
            Json(json!({ "id": PLAYLIST_ID, "name": body["name"], "public": false })),
        )
    } else {
        (
            status,
            Json(json!({ "error": { "status": status.as_u16(), "message": "Rejected" } })),
        )
    }
}

async fn add_tracks(
    State(state): State<Shared>,
    UrlPath((user, id)): UrlPath<(String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let uris: Vec<String> = body["uris"]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    state
        .recorded
        .lock()
        .expect("poisoned")
        .added
        .push((user, id, uris));

    let status = state.behaviour.add_status;
    if status == StatusCode::CREATED {
        (status, Json(json!({ "snapshot_id": "snap-1" })))
    } else {
        (
            status,
            Json(json!({ "error": { "status": status.as_u16(), "message": "Rejected" } })),
        )
    }
}
