use serde_json::Value;

use crate::{
    config::Config,
    error::ApiError,
    spotify::http,
    types::{AccessToken, Token},
};

/// Exchanges the configured refresh token for a fresh access token.
///
/// Posts `grant_type=refresh_token` to the accounts service, authenticated
/// with the client id and secret as HTTP Basic credentials, and returns the
/// `access_token` field of the response.
///
/// # Errors
///
/// - `ApiError::Http` if the request cannot be sent or the body is not JSON
/// - `ApiError::MissingField("access_token")` if Spotify answered without a
///   token, which is what an invalid refresh token or bad client credentials
///   look like
///
/// There is no retry; callers treat any error here as fatal.
pub async fn refresh_access_token(config: &Config) -> Result<AccessToken, ApiError> {
    let response = http::post_form(
        &config.token_url,
        &config.client_id,
        &config.client_secret,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", config.refresh_token.as_str()),
        ],
    )
    .await?;

    let json: Value = response.json().await?;
    let token = json["access_token"]
        .as_str()
        .ok_or(ApiError::MissingField("access_token"))?;

    Ok(AccessToken::new(token))
}

/// Builds the URL the user opens once to grant access to the application.
///
/// After approving, Spotify redirects to the configured redirect URI with a
/// `code` query parameter, which [`exchange_code`] turns into tokens.
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = config.auth_url,
        client_id = urlencoding::encode(&config.client_id),
        redirect_uri = urlencoding::encode(&config.redirect_uri),
        scope = urlencoding::encode(&config.scope),
    )
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// This is a one-time setup step: the refresh token it yields is what
/// `SPOTIFY_API_REFRESH_TOKEN` should be set to.
pub async fn exchange_code(config: &Config, code: &str) -> Result<Token, ApiError> {
    let response = http::post_form(
        &config.token_url,
        &config.client_id,
        &config.client_secret,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ],
    )
    .await?;

    let json: Value = response.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .ok_or(ApiError::MissingField("access_token"))?
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .ok_or(ApiError::MissingField("refresh_token"))?
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
    })
}
