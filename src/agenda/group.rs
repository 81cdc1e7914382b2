use std::collections::HashMap;

use chrono::{FixedOffset, NaiveDate};

use super::event::Event;

/// All events starting on one local calendar date, in sorted arrival order
#[derive(Debug, Clone)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

/// Partition pre-sorted events into per-date buckets. Buckets appear in
/// first-seen order, which for sorted input is ascending date order, and
/// events keep their relative order inside each bucket.
pub fn group_by_date(events: Vec<Event>, offset: FixedOffset) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for event in events {
        let date = event.local_start_date(offset);
        match index.get(&date) {
            Some(&position) => buckets[position].events.push(event),
            None => {
                index.insert(date, buckets.len());
                buckets.push(DayBucket {
                    date,
                    events: vec![event],
                });
            }
        }
    }

    buckets
}
