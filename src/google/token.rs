use crate::config::Config;
use crate::error::{oauth_error, AgendaResult};
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Manages the OAuth token document cached on disk. The document is a JSON
/// object with access_token, refresh_token and expires_at fields.
#[derive(Clone)]
pub struct TokenManager {
    client_id: String,
    client_secret: String,
    cache_path: PathBuf,
    client: Client,
}

impl TokenManager {
    pub fn new(config: &Config) -> Self {
        Self {
            client_id: config.google_client_id.clone(),
            client_secret: config.google_client_secret.clone(),
            cache_path: PathBuf::from(&config.token_cache_path),
            client: Client::new(),
        }
    }

    /// Get an OAuth token, either from the disk cache or by refreshing
    pub async fn get_token(&self) -> AgendaResult<Value> {
        let token_str = fs::read_to_string(&self.cache_path).map_err(|_| {
            oauth_error(&format!(
                "No cached token at '{}'. Run the authorize binary first.",
                self.cache_path.display()
            ))
        })?;

        let token: Value = serde_json::from_str(&token_str)
            .map_err(|e| oauth_error(&format!("Failed to parse cached token JSON: {}", e)))?;

        // Check if the token is still valid
        if let Some(expiry) = token.get("expires_at").and_then(|v| v.as_i64()) {
            let now = Utc::now().timestamp();
            if expiry > now {
                debug!("Cached token is still valid");
                return Ok(token);
            }
            // Token is expired, refresh it
            return self.refresh_token(&token).await;
        }

        Err(oauth_error(
            "Cached token has no expiry. Run the authorize binary to replace it.",
        ))
    }

    /// Refresh an expired token and write the new document back to disk
    async fn refresh_token(&self, token: &Value) -> AgendaResult<Value> {
        let refresh_token = token
            .get("refresh_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| oauth_error("No refresh token in cached token data"))?;

        debug!("Refreshing expired OAuth token");

        let params = [
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
            ("refresh_token", refresh_token.to_string()),
            ("grant_type", "refresh_token".to_string()),
        ];

        let response = self
            .client
            .post("https://oauth2.googleapis.com/token")
            .form(&params)
            .send()
            .await
            .map_err(|e| oauth_error(&format!("Failed to refresh token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(oauth_error(&format!(
                "Failed to refresh token: HTTP {} - {}",
                status, error_body
            )));
        }

        let new_token: Value = response
            .json()
            .await
            .map_err(|e| oauth_error(&format!("Failed to parse token response: {}", e)))?;

        let access_token = new_token
            .get("access_token")
            .cloned()
            .ok_or_else(|| oauth_error("Token response missing 'access_token' field"))?;

        // Combine the new access token with the preserved refresh token
        let mut token_data = serde_json::Map::new();
        token_data.insert("access_token".to_string(), access_token);
        token_data.insert("refresh_token".to_string(), json!(refresh_token));

        // Calculate expiry
        let expires_in = new_token
            .get("expires_in")
            .and_then(|v| v.as_i64())
            .unwrap_or(3600);
        let expires_at = Utc::now().timestamp() + expires_in;
        token_data.insert("expires_at".to_string(), json!(expires_at));

        let token_json = json!(token_data);
        self.set_token(&token_json)?;

        Ok(token_json)
    }

    /// Write a token document to the disk cache (called by the authorize
    /// binary after the consent flow and after every refresh)
    pub fn set_token(&self, token_json: &Value) -> AgendaResult<()> {
        fs::write(&self.cache_path, token_json.to_string())
            .map_err(|e| oauth_error(&format!("Failed to save token to disk: {}", e)))?;
        Ok(())
    }
}
