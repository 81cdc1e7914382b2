use chrono::{Duration, Local, NaiveTime, TimeZone};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::agenda::{group_by_date, render_agenda, sort_by_start, Event};
use crate::config::Config;
use crate::error::{google_calendar_error, other_error};
use crate::google::{CalendarClient, TokenManager};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Fetch events from every calendar, run them through the agenda core, and
/// print the result to stdout
pub async fn run(config: Config) -> miette::Result<()> {
    let token_manager = TokenManager::new(&config);
    let token = token_manager.get_token().await?;
    let access_token = token
        .get("access_token")
        .and_then(|t| t.as_str())
        .ok_or_else(|| google_calendar_error("No access token available"))?;

    let client = CalendarClient::new(access_token.to_string());

    // Window: now until local midnight after lookahead_days
    let now = Local::now();
    let offset = *now.offset();
    let window_end_date = now.date_naive() + Duration::days(config.lookahead_days);
    let window_end = Local
        .from_local_datetime(&window_end_date.and_time(NaiveTime::MIN))
        .earliest()
        .unwrap_or_else(|| now + Duration::days(config.lookahead_days));

    let calendars = client.list_calendars().await?;
    info!("Fetching events from {} calendars", calendars.len());

    let mut events: Vec<Event> = Vec::new();
    for calendar in &calendars {
        let raw_events = client
            .list_events(
                &calendar.id,
                &now,
                &window_end,
                config.max_results_per_calendar,
            )
            .await?;

        if raw_events.is_empty() {
            debug!("Calendar '{}' has no upcoming events", calendar.summary);
            continue;
        }

        events.extend(raw_events.iter().filter_map(Event::from_raw));
    }

    sort_by_start(&mut events, offset);
    let buckets = group_by_date(events, offset);
    print!("{}", render_agenda(&buckets));

    Ok(())
}
