use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Config,
    info,
    management::OutputManager,
    spotify::http,
    success,
    types::{
        AccessToken, FailedRequest, FailedTableRow, Resolution, ResolvedTrack, SearchResponse,
        TrackRequest, TrackTableRow,
    },
    utils, warning,
};

/// Result of searching for a single request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The first search result.
    Found(ResolvedTrack),
    /// Spotify answered, with no results.
    NotFound,
    /// The call failed; the reason is meant for humans.
    Failed(String),
}

/// Searches the catalog for one (artist, track) pair.
///
/// Only the first result is considered (`limit=1`). A result without a
/// track URI cannot be added to a playlist and counts as a failure.
pub async fn search_track(
    config: &Config,
    request: &TrackRequest,
    token: &AccessToken,
) -> SearchOutcome {
    let url = format!(
        "{api}/search?{query}",
        api = config.api_url,
        query = utils::build_search_query(request)
    );

    let response = match http::get(&url, token).await {
        Ok(response) => response,
        Err(e) => return SearchOutcome::Failed(e.to_string()),
    };

    let status = response.status();
    if !status.is_success() {
        return SearchOutcome::Failed(format!("search returned {status}"));
    }

    let body = match response.json::<SearchResponse>().await {
        Ok(body) => body,
        Err(e) => return SearchOutcome::Failed(format!("unreadable search response: {e}")),
    };

    match body.tracks.items.into_iter().next() {
        Some(item) if item.uri.is_empty() => {
            SearchOutcome::Failed(format!("match {} has no track URI", item.id))
        }
        Some(item) => SearchOutcome::Found(item.into()),
        None => SearchOutcome::NotFound,
    }
}

/// Resolves every request of a track list, then records and reports the
/// outcome.
///
/// Requests are searched one after the other, in input order. Matches are
/// keyed by track id, so two requests landing on the same track produce one
/// entry. Zero-match requests go to `unresolved`, failed calls to `failed`.
///
/// When anything matched, the matches are written to `<title>_data.json`;
/// when anything went unmatched, those requests are written to
/// `<title>_not_found.json` and printed. A failed write is reported and
/// otherwise ignored. An empty request list yields an empty [`Resolution`]
/// and writes nothing.
pub async fn resolve(
    config: &Config,
    title: &str,
    requests: &[TrackRequest],
    token: &AccessToken,
) -> Resolution {
    let mut resolution = Resolution::default();

    if requests.is_empty() {
        info!("No tracks to resolve for {}", title);
        return resolution;
    }

    info!("Resolving {} tracks for {}", requests.len(), title);

    let pb = ProgressBar::new(requests.len() as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.blue} [{bar:30.blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=> "));
    }

    for request in requests {
        pb.set_message(format!("{} - {}", request.artist, request.track));

        match search_track(config, request, token).await {
            SearchOutcome::Found(track) => resolution.insert(track),
            SearchOutcome::NotFound => resolution.unresolved.push(request.clone()),
            SearchOutcome::Failed(reason) => resolution.failed.push(FailedRequest {
                request: request.clone(),
                reason,
            }),
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    record(config, title, &resolution).await;
    resolution
}

async fn record(config: &Config, title: &str, resolution: &Resolution) {
    let output = OutputManager::new(&config.output_dir, title);

    if !resolution.tracks.is_empty() {
        if let Err(e) = output.persist_resolved(&resolution.tracks).await {
            warning!("Failed to save {}: {}", output.data_path().display(), e);
        }
        success!("{} tracks identified", resolution.tracks.len());
    }

    if !resolution.unresolved.is_empty() {
        if let Err(e) = output.persist_not_found(&resolution.unresolved).await {
            warning!("Failed to save {}: {}", output.not_found_path().display(), e);
        }
        warning!("{} unidentified tracks", resolution.unresolved.len());

        let rows = resolution.unresolved.iter().map(|r| TrackTableRow {
            artist: r.artist.clone(),
            track: r.track.clone(),
        });
        println!("{}", Table::new(rows));
    }

    if !resolution.failed.is_empty() {
        warning!("{} searches failed", resolution.failed.len());

        let rows = resolution.failed.iter().map(|f| FailedTableRow {
            artist: f.request.artist.clone(),
            track: f.request.track.clone(),
            reason: f.reason.clone(),
        });
        println!("{}", Table::new(rows));
    }
}
