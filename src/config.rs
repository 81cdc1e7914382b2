use crate::error::{config_error, env_error, AgendaResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default path for the cached OAuth token
pub const DEFAULT_TOKEN_CACHE_PATH: &str = "token.json";

/// Default number of days of agenda to show (window ends at local midnight
/// after this many days)
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 2;

/// Default number of events requested per calendar
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Main configuration structure for the agenda tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar API client ID
    pub google_client_id: String,
    /// Google Calendar API client secret
    pub google_client_secret: String,
    /// Path to the cached OAuth token document
    pub token_cache_path: String,
    /// How many days ahead the agenda window extends
    pub lookahead_days: i64,
    /// Maximum events fetched per calendar
    pub max_results_per_calendar: u32,
}

/// Optional overrides loaded from config/agenda.toml
#[derive(Debug, Default, Deserialize)]
struct Overrides {
    lookahead_days: Option<i64>,
    max_results_per_calendar: Option<u32>,
}

impl Config {
    /// Load configuration from environment and optional config file
    pub fn load() -> AgendaResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;

        // Optional variables with defaults
        let token_cache_path = env::var("TOKEN_CACHE_PATH")
            .unwrap_or_else(|_| String::from(DEFAULT_TOKEN_CACHE_PATH));

        let mut lookahead_days = match env::var("LOOKAHEAD_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| config_error("Invalid LOOKAHEAD_DAYS format"))?,
            Err(_) => DEFAULT_LOOKAHEAD_DAYS,
        };

        let mut max_results_per_calendar = match env::var("MAX_RESULTS_PER_CALENDAR") {
            Ok(value) => value
                .parse::<u32>()
                .map_err(|_| config_error("Invalid MAX_RESULTS_PER_CALENDAR format"))?,
            Err(_) => DEFAULT_MAX_RESULTS,
        };

        // Apply overrides from the config file if it exists
        if let Ok(content) = fs::read_to_string("config/agenda.toml") {
            if let Ok(overrides) = toml::from_str::<Overrides>(&content) {
                if let Some(days) = overrides.lookahead_days {
                    lookahead_days = days;
                }
                if let Some(max_results) = overrides.max_results_per_calendar {
                    max_results_per_calendar = max_results;
                }
            }
        }

        Ok(Config {
            google_client_id,
            google_client_secret,
            token_cache_path,
            lookahead_days,
            max_results_per_calendar,
        })
    }
}
