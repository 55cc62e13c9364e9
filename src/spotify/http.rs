use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, Response, header::AUTHORIZATION};
use serde::Serialize;

use crate::{error::ApiError, types::AccessToken, warning};

/// Issues an authenticated GET request.
///
/// Non-success statuses are reported but not turned into errors; the caller
/// decides what a failed response means. Only transport failures (DNS,
/// connection refused, ...) come back as `Err`.
pub async fn get(url: &str, token: &AccessToken) -> Result<Response, reqwest::Error> {
    let client = Client::new();
    let response = client.get(url).bearer_auth(token.as_str()).send().await?;
    Ok(report(response))
}

/// Issues an authenticated POST request with a JSON body.
pub async fn post_json<T: Serialize + ?Sized>(
    url: &str,
    token: &AccessToken,
    body: &T,
) -> Result<Response, reqwest::Error> {
    let client = Client::new();
    let response = client
        .post(url)
        .bearer_auth(token.as_str())
        .json(body)
        .send()
        .await?;
    Ok(report(response))
}

/// Issues a form-encoded POST request authenticated with client credentials.
pub async fn post_form(
    url: &str,
    client_id: &str,
    client_secret: &str,
    form: &[(&str, &str)],
) -> Result<Response, reqwest::Error> {
    let client = Client::new();
    let response = client
        .post(url)
        .header(AUTHORIZATION, basic_auth_header(client_id, client_secret))
        .form(form)
        .send()
        .await?;
    Ok(report(response))
}

/// `Basic base64(client_id:client_secret)`
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {credentials}")
}

/// Consumes a response the caller did not expect and keeps its body for the
/// error message.
pub async fn unexpected(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::UnexpectedStatus { status, body }
}

fn report(response: Response) -> Response {
    let status = response.status();
    if !status.is_success() {
        warning!(
            "There was a problem: {} for {}",
            status,
            response.url().path()
        );
    }
    response
}
