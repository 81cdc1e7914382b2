use crate::error::{google_calendar_error, AgendaResult};
use chrono::{DateTime, Local};
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::models::{CalendarListEntry, RawEvent};

const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Thin client for the two Google Calendar endpoints the agenda needs:
/// the calendar directory and the per-calendar event listing.
pub struct CalendarClient {
    client: Client,
    access_token: String,
}

impl CalendarClient {
    pub fn new(access_token: String) -> Self {
        Self {
            client: Client::new(),
            access_token,
        }
    }

    /// List all of the user's calendars, following nextPageToken until the
    /// directory is exhausted
    pub async fn list_calendars(&self) -> AgendaResult<Vec<CalendarListEntry>> {
        let mut entries = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = Url::parse(&format!("{}/users/me/calendarList", CALENDAR_API_BASE))
                .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

            if let Some(token) = &page_token {
                url.query_pairs_mut().append_pair("pageToken", token);
            }

            let data = self.get_json(url).await?;

            if let Some(items) = data.get("items").and_then(|i| i.as_array()) {
                for item in items {
                    let id = item
                        .get("id")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string();
                    if id.is_empty() {
                        continue;
                    }
                    let summary = item
                        .get("summary")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string();
                    entries.push(CalendarListEntry { id, summary });
                }
            }

            page_token = data
                .get("nextPageToken")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string());

            if page_token.is_none() {
                break;
            }
        }

        debug!("Calendar directory has {} entries", entries.len());
        Ok(entries)
    }

    /// List upcoming events for one calendar inside the given window. The
    /// API expands recurrences (singleEvents) so every item is a concrete
    /// occurrence. An empty item list is not an error.
    pub async fn list_events(
        &self,
        calendar_id: &str,
        time_min: &DateTime<Local>,
        time_max: &DateTime<Local>,
        max_results: u32,
    ) -> AgendaResult<Vec<RawEvent>> {
        let mut url = Url::parse(CALENDAR_API_BASE)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        // Calendar IDs may contain '#' and '@', so they go in as a path
        // segment rather than into a format string
        url.path_segments_mut()
            .map_err(|_| google_calendar_error("Invalid API base URL"))?
            .extend(["calendars", calendar_id, "events"]);

        url.query_pairs_mut()
            .append_pair("timeMin", &time_min.to_rfc3339())
            .append_pair("timeMax", &time_max.to_rfc3339())
            .append_pair("maxResults", &max_results.to_string())
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        let data = self.get_json(url).await?;

        let events = data
            .get("items")
            .and_then(|i| i.as_array())
            .map(|items| items.iter().map(raw_event_from_item).collect())
            .unwrap_or_default();

        Ok(events)
    }

    /// Perform an authenticated GET and parse the JSON body
    async fn get_json(&self, url: Url) -> AgendaResult<serde_json::Value> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Request failed: HTTP {} - {}",
                status, error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse response: {}", e)))
    }
}

/// Flatten one wire event into the raw record shape the agenda ingests
fn raw_event_from_item(item: &serde_json::Value) -> RawEvent {
    let summary = item
        .get("summary")
        .and_then(|s| s.as_str())
        .map(|s| s.to_string());

    let start_date_time = item
        .get("start")
        .and_then(|start| start.get("dateTime"))
        .and_then(|dt| dt.as_str())
        .map(|s| s.to_string());

    let start_date = item
        .get("start")
        .and_then(|start| start.get("date"))
        .and_then(|d| d.as_str())
        .map(|s| s.to_string());

    let end_date_time = item
        .get("end")
        .and_then(|end| end.get("dateTime"))
        .and_then(|dt| dt.as_str())
        .map(|s| s.to_string());

    let end_date = item
        .get("end")
        .and_then(|end| end.get("date"))
        .and_then(|d| d.as_str())
        .map(|s| s.to_string());

    RawEvent {
        summary,
        start_date_time,
        start_date,
        end_date_time,
        end_date,
    }
}
