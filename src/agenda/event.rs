use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use tracing::warn;

use crate::google::models::RawEvent;

/// A calendar event with its timestamp shape resolved once at ingestion.
/// Timed events keep the provider's offset; all-day events are date-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Timed {
        title: String,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
    AllDay {
        title: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl Event {
    /// Resolve a raw provider record into a typed event. Tries the timed
    /// shape first, then the all-day shape. A record matching neither is
    /// degraded to a date-only event when a date prefix can be salvaged,
    /// and skipped with a warning otherwise.
    pub fn from_raw(raw: &RawEvent) -> Option<Event> {
        let title = raw
            .summary
            .clone()
            .unwrap_or_else(|| String::from("(untitled)"));

        if let (Some(start), Some(end)) = (&raw.start_date_time, &raw.end_date_time) {
            if let (Ok(start), Ok(end)) = (
                DateTime::parse_from_rfc3339(start),
                DateTime::parse_from_rfc3339(end),
            ) {
                return Some(Event::Timed { title, start, end });
            }
        }

        if let (Some(start), Some(end)) = (&raw.start_date, &raw.end_date) {
            if let (Ok(start), Ok(end)) = (
                NaiveDate::parse_from_str(start, "%Y-%m-%d"),
                NaiveDate::parse_from_str(end, "%Y-%m-%d"),
            ) {
                return Some(Event::AllDay { title, start, end });
            }
        }

        // Degraded path: salvage a date prefix from whichever field parses
        if let Some(date) = salvage_date(raw) {
            warn!(
                "Event '{}' has a malformed timestamp, showing it as date-only",
                title
            );
            return Some(Event::AllDay {
                title,
                start: date,
                end: date,
            });
        }

        warn!("Skipping event '{}': no parsable start or end", title);
        None
    }

    pub fn title(&self) -> &str {
        match self {
            Event::Timed { title, .. } => title,
            Event::AllDay { title, .. } => title,
        }
    }

    /// The absolute instant the event starts, used as the sort key. All-day
    /// events count as midnight in the viewer's offset.
    pub fn start_instant(&self, offset: FixedOffset) -> DateTime<FixedOffset> {
        match self {
            Event::Timed { start, .. } => *start,
            Event::AllDay { start, .. } => {
                let local_midnight = start.and_time(NaiveTime::MIN);
                DateTime::from_naive_utc_and_offset(local_midnight - offset, offset)
            }
        }
    }

    /// The calendar date the event starts on in the viewer's offset, used
    /// as the grouping key
    pub fn local_start_date(&self, offset: FixedOffset) -> NaiveDate {
        match self {
            Event::Timed { start, .. } => start.with_timezone(&offset).date_naive(),
            Event::AllDay { start, .. } => *start,
        }
    }
}

/// Take the first parsable YYYY-MM-DD prefix among the raw timestamp fields
fn salvage_date(raw: &RawEvent) -> Option<NaiveDate> {
    [
        raw.start_date_time.as_deref(),
        raw.start_date.as_deref(),
        raw.end_date_time.as_deref(),
        raw.end_date.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find_map(|value| {
        let prefix = value.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    })
}
