//! Reading track lists produced by an extraction step.
//!
//! Two formats are understood:
//!
//! - `*.json`: `{"title": "...", "tracks": [{"artist": "...", "track": "..."}]}`
//! - anything else: plain text, one `Artist - Track` per line. A first
//!   non-blank line of the form `# Title` names the playlist; otherwise the
//!   file stem does. Every other line is a track line, `#` or not.
//!
//! A file that yields no track at all is rejected with [`SourceError::Empty`].

use std::path::Path;

use crate::{
    error::SourceError,
    types::{TrackList, TrackRequest},
    warning,
};

const SEPARATOR: &str = " - ";

/// Loads a track list from `path`, picking the format from its extension.
pub async fn load(path: &Path) -> Result<TrackList, SourceError> {
    let content = async_fs::read_to_string(path).await?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let list = if is_json {
        parse_json(&content)?
    } else {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("playlist");
        parse_text(&content, stem)
    };

    if list.tracks.is_empty() {
        return Err(SourceError::Empty(path.to_path_buf()));
    }

    Ok(list)
}

pub fn parse_json(content: &str) -> Result<TrackList, SourceError> {
    Ok(serde_json::from_str(content)?)
}

/// Parses the line-based format. Malformed lines are reported and skipped.
pub fn parse_text(content: &str, default_title: &str) -> TrackList {
    let mut title: Option<String> = None;
    let mut tracks = Vec::new();
    let mut first = true;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        // Only `# ` opens a title; `#1 Dads - So Soldier` is a track.
        if std::mem::take(&mut first) {
            if let Some(candidate) = line.strip_prefix("# ") {
                title = Some(candidate.trim().to_string());
                continue;
            }
        }

        match line.split_once(SEPARATOR) {
            Some((artist, track)) if !artist.trim().is_empty() && !track.trim().is_empty() => {
                tracks.push(TrackRequest::new(artist.trim(), track.trim()));
            }
            _ => warning!(
                "Skipping line {}: expected `Artist - Track`, got {:?}",
                idx + 1,
                line
            ),
        }
    }

    TrackList {
        title: title.unwrap_or_else(|| default_title.to_string()),
        tracks,
    }
}
