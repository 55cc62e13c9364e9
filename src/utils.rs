use crate::types::TrackRequest;

/// Number of items Spotify accepts in one add-tracks request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

/// Escapes `value` the way a JSON string literal would, without the
/// surrounding quotes.
///
/// Quotes, backslashes and control characters get backslash escapes; every
/// other character, including non-ASCII text, is kept as is. Names such as
/// `Guns "N" Roses` match noticeably better once escaped.
pub fn escape_literal(value: &str) -> String {
    let quoted = serde_json::Value::String(value.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Percent-encodes an already escaped search term for use in a query string.
pub fn encode_search_term(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Escape, then encode. The order matters: encoding first would hide the
/// characters the escape step is meant to handle.
pub fn prepare_search_term(value: &str) -> String {
    encode_search_term(&escape_literal(value))
}

/// Builds the search query string (without the leading `?`) for a request.
///
/// ```text
/// q=artist:"<artist>"+track:"<track>"&type=track&limit=1
/// ```
pub fn build_search_query(request: &TrackRequest) -> String {
    format!(
        "q=artist:\"{artist}\"+track:\"{track}\"&type=track&limit=1",
        artist = prepare_search_term(&request.artist),
        track = prepare_search_term(&request.track),
    )
}

/// Turns a playlist title into something safe to use as a file name stem.
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => "untitled".to_string(),
        _ => cleaned,
    }
}
