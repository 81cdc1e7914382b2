//! The agenda core: ingests raw provider records into typed events, orders
//! them by start instant, groups them by local calendar date, and renders
//! the result as plain text. Fully synchronous; operates on a materialized
//! event list and never touches the network.

pub mod event;
pub mod group;
pub mod render;
pub mod sort;

pub use event::Event;
pub use group::{group_by_date, DayBucket};
pub use render::{render_agenda, time_range};
pub use sort::sort_by_start;
