use gcal_agenda::config::Config;
use gcal_agenda::error::{oauth_error, AgendaResult};
use gcal_agenda::google::TokenManager;
use serde_json::json;
use url::Url;

const REDIRECT_URI: &str = "http://localhost:8090";

#[tokio::main]
async fn main() -> AgendaResult<()> {
    // Load configuration
    let config = Config::load()?;
    let token_manager = TokenManager::new(&config);

    // Generate random state for security
    let state = uuid::Uuid::new_v4().to_string();

    // Construct authorization URL
    let auth_url = format!(
        "https://accounts.google.com/o/oauth2/v2/auth?\
        client_id={}&\
        redirect_uri={}&\
        response_type=code&\
        access_type=offline&\
        prompt=consent&\
        scope=https://www.googleapis.com/auth/calendar.readonly&\
        state={}",
        config.google_client_id, REDIRECT_URI, state
    );

    // Open browser for authorization
    println!("Opening browser for Google Calendar authorization...");
    webbrowser::open(&auth_url)?;

    // Start local server to receive the callback
    let server = tiny_http::Server::http("0.0.0.0:8090")?;
    println!("Waiting for authorization callback...");

    // Handle the callback
    let request = server.recv()?;
    let url = request.url().to_string();

    // Verify the state parameter round-tripped
    let returned_state = query_param(&url, "state")
        .ok_or_else(|| oauth_error("No state parameter found in callback"))?;
    if returned_state != state {
        return Err(oauth_error("State parameter mismatch in callback"));
    }

    // Parse the authorization code from the URL
    let code =
        query_param(&url, "code").ok_or_else(|| oauth_error("No authorization code found in callback"))?;

    // Exchange code for tokens
    let client = reqwest::Client::new();
    let response = client
        .post("https://oauth2.googleapis.com/token")
        .form(&[
            ("client_id", config.google_client_id.clone()),
            ("client_secret", config.google_client_secret.clone()),
            ("code", code),
            ("redirect_uri", REDIRECT_URI.to_string()),
            ("grant_type", "authorization_code".to_string()),
        ])
        .send()
        .await
        .map_err(|e| oauth_error(&format!("Failed to exchange code: {}", e)))?;

    if !response.status().is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response".to_string());
        return Err(oauth_error(&format!("Failed to get token: {}", error_text)));
    }

    let mut token_data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| oauth_error(&format!("Failed to parse token response: {}", e)))?;

    // Add expiry timestamp
    let expires_in = token_data
        .get("expires_in")
        .and_then(|v| v.as_i64())
        .unwrap_or(3600);
    let expires_at = chrono::Utc::now().timestamp() + expires_in;

    if let Some(obj) = token_data.as_object_mut() {
        obj.insert("expires_at".to_string(), json!(expires_at));
    } else {
        return Err(oauth_error("Token data is not an object"));
    }

    // Save token to the disk cache
    token_manager.set_token(&token_data)?;

    // Send success response to browser
    let response =
        tiny_http::Response::from_string("Authorization successful! You can close this window.");
    request.respond(response)?;

    println!("Token saved to {}", config.token_cache_path);

    Ok(())
}

/// Pull one query parameter value out of the callback URL. tiny_http hands
/// over the raw request line, and Google percent-encodes the authorization
/// code (they contain slashes), so the value must be decoded here.
fn query_param(raw_url: &str, name: &str) -> Option<String> {
    let url = Url::parse(&format!("http://localhost{}", raw_url)).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
