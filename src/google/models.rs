/// One entry from the user's calendar directory
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct CalendarListEntry {
    pub id: String,
    pub summary: String,
}

/// Raw wire-shaped event as returned by the events endpoint. Start and end
/// each carry either a dateTime (timed event) or a date (all-day event).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct RawEvent {
    pub summary: Option<String>,
    pub start_date_time: Option<String>,
    pub start_date: Option<String>,
    pub end_date_time: Option<String>,
    pub end_date: Option<String>,
}
