use crate::{config::Config, error, info, spotify, success, warning};

pub fn authorize(config: &Config) {
    let url = spotify::auth::authorize_url(config);

    if webbrowser::open(&url).is_err() {
        warning!("Failed to open browser. Please navigate to the following URL manually:");
    } else {
        info!("Opened the authorization page. If nothing shows up, use this URL:");
    }
    println!("{url}");
    info!("After approving, run `spotlist exchange <CODE>` with the `code` parameter of the redirect.");
}

pub async fn exchange(config: &Config, code: &str) {
    match spotify::auth::exchange_code(config, code).await {
        Ok(token) => {
            success!("Authorization code exchanged (scope: {})", token.scope);
            println!("SPOTIFY_API_REFRESH_TOKEN={}", token.refresh_token);
        }
        Err(e) => error!("Failed to exchange authorization code: {}", e),
    }
}
