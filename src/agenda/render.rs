use super::event::Event;
use super::group::DayBucket;

/// Format the time-range display line for one event.
///
/// Timed events show a 12-hour clock range; when the end falls on a
/// different calendar date than the start, the end carries its own date.
/// All-day events show only dates.
pub fn time_range(event: &Event) -> String {
    match event {
        Event::Timed { start, end, .. } => {
            if start.date_naive() == end.date_naive() {
                format!("{} -> {}", start.format("%I:%M%p"), end.format("%I:%M%p"))
            } else {
                format!(
                    "{} -> {} - {}",
                    start.format("%I:%M%p"),
                    end.format("%I:%M%p"),
                    end.format("%d/%m/%Y")
                )
            }
        }
        Event::AllDay { start, end, .. } => {
            if start == end {
                start.format("%d/%m/%Y").to_string()
            } else {
                format!("{} -> {}", start.format("%d/%m/%Y"), end.format("%d/%m/%Y"))
            }
        }
    }
}

/// Render the grouped agenda as plain text: one heading per date bucket
/// (abbreviated weekday plus date), then a time-range line and a title line
/// per event, with a blank line between events. Zero buckets render as an
/// empty string.
pub fn render_agenda(buckets: &[DayBucket]) -> String {
    let mut out = String::new();

    for (bucket_index, bucket) in buckets.iter().enumerate() {
        if bucket_index > 0 {
            out.push('\n');
        }
        out.push_str(&bucket.date.format("%a %d/%m/%Y").to_string());
        out.push('\n');

        for (event_index, event) in bucket.events.iter().enumerate() {
            if event_index > 0 {
                out.push('\n');
            }
            out.push_str(&time_range(event));
            out.push('\n');
            out.push_str(event.title());
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate};

    fn timed(title: &str, start: &str, end: &str) -> Event {
        Event::Timed {
            title: title.to_string(),
            start: DateTime::parse_from_rfc3339(start).unwrap(),
            end: DateTime::parse_from_rfc3339(end).unwrap(),
        }
    }

    fn all_day(title: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Event {
        Event::AllDay {
            title: title.to_string(),
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn test_same_day_timed_event() {
        let event = timed(
            "Review",
            "2024-01-10T09:00:00+00:00",
            "2024-01-10T10:30:00+00:00",
        );
        assert_eq!(time_range(&event), "09:00AM -> 10:30AM");
    }

    #[test]
    fn test_cross_day_timed_event_carries_end_date() {
        let event = timed(
            "Night shift",
            "2024-01-10T23:00:00+00:00",
            "2024-01-11T01:00:00+00:00",
        );
        assert_eq!(time_range(&event), "11:00PM -> 01:00AM - 11/01/2024");
    }

    #[test]
    fn test_same_day_all_day_event() {
        let event = all_day("Holiday", (2024, 1, 10), (2024, 1, 10));
        assert_eq!(time_range(&event), "10/01/2024");
    }

    #[test]
    fn test_spanning_all_day_event() {
        let event = all_day("Conference", (2024, 1, 10), (2024, 1, 12));
        assert_eq!(time_range(&event), "10/01/2024 -> 12/01/2024");
    }

    #[test]
    fn test_afternoon_times_render_as_pm() {
        let event = timed(
            "Late meeting",
            "2024-01-10T14:00:00+00:00",
            "2024-01-10T15:45:00+00:00",
        );
        assert_eq!(time_range(&event), "02:00PM -> 03:45PM");
    }

    #[test]
    fn test_agenda_layout() {
        let buckets = vec![
            DayBucket {
                // 2024-01-10 is a Wednesday
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                events: vec![
                    timed(
                        "Standup",
                        "2024-01-10T09:00:00+00:00",
                        "2024-01-10T09:15:00+00:00",
                    ),
                    all_day("Holiday", (2024, 1, 10), (2024, 1, 10)),
                ],
            },
            DayBucket {
                date: NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
                events: vec![timed(
                    "Lunch",
                    "2024-01-11T12:00:00+00:00",
                    "2024-01-11T13:00:00+00:00",
                )],
            },
        ];

        let expected = "\
Wed 10/01/2024
09:00AM -> 09:15AM
Standup

10/01/2024
Holiday

Thu 11/01/2024
12:00PM -> 01:00PM
Lunch
";
        assert_eq!(render_agenda(&buckets), expected);
    }

    #[test]
    fn test_empty_agenda_renders_nothing() {
        assert_eq!(render_agenda(&[]), "");
    }
}
