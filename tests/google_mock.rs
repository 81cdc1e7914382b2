use gcal_agenda::agenda::Event;
use gcal_agenda::error::AgendaResult;
use gcal_agenda::google::models::{CalendarListEntry, RawEvent};

/// Mock implementation of the Google Calendar event source for testing
#[derive(Debug, Clone, Default)]
pub struct MockCalendarClient {
    calendars: Vec<CalendarListEntry>,
    events: Vec<(String, Vec<RawEvent>)>,
}

impl MockCalendarClient {
    /// Create a new mock with two calendars and predefined events
    pub fn new() -> Self {
        let calendars = vec![
            CalendarListEntry {
                id: "work".to_string(),
                summary: "Work".to_string(),
            },
            CalendarListEntry {
                id: "personal".to_string(),
                summary: "Personal".to_string(),
            },
        ];

        let events = vec![
            (
                "work".to_string(),
                vec![RawEvent {
                    summary: Some("Planning".to_string()),
                    start_date_time: Some("2024-01-10T10:00:00+00:00".to_string()),
                    end_date_time: Some("2024-01-10T11:00:00+00:00".to_string()),
                    ..Default::default()
                }],
            ),
            (
                "personal".to_string(),
                vec![RawEvent {
                    summary: Some("Dentist".to_string()),
                    start_date_time: Some("2024-01-10T08:30:00+00:00".to_string()),
                    end_date_time: Some("2024-01-10T09:00:00+00:00".to_string()),
                    ..Default::default()
                }],
            ),
        ];

        Self { calendars, events }
    }

    /// List the mock calendar directory
    pub fn list_calendars(&self) -> AgendaResult<Vec<CalendarListEntry>> {
        Ok(self.calendars.clone())
    }

    /// List events for one mock calendar; unknown calendars are empty
    pub fn list_events(&self, calendar_id: &str) -> AgendaResult<Vec<RawEvent>> {
        Ok(self
            .events
            .iter()
            .find(|(id, _)| id == calendar_id)
            .map(|(_, events)| events.clone())
            .unwrap_or_default())
    }
}

/// Test that demonstrates how to use the mock
#[test]
fn test_mock_calendar_client() {
    let mock = MockCalendarClient::new();

    let calendars = mock.list_calendars().unwrap();
    assert_eq!(calendars.len(), 2);
    assert_eq!(calendars[0].id, "work");

    let events = mock.list_events("work").unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].summary.as_deref(), Some("Planning"));

    // A calendar with no events contributes nothing and is not an error
    let empty = mock.list_events("unknown").unwrap();
    assert!(empty.is_empty());
}

/// Test flattening the mock's calendars into one ingested sequence
#[test]
fn test_flattening_across_calendars() {
    let mock = MockCalendarClient::new();

    let mut events: Vec<Event> = Vec::new();
    for calendar in mock.list_calendars().unwrap() {
        let raw_events = mock.list_events(&calendar.id).unwrap();
        events.extend(raw_events.iter().filter_map(Event::from_raw));
    }

    assert_eq!(events.len(), 2);
    let titles: Vec<&str> = events.iter().map(Event::title).collect();
    assert!(titles.contains(&"Planning"));
    assert!(titles.contains(&"Dentist"));
}
