// src/feed/date.rs

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use super::record::BookingRecord;

/// RFC 1123 / HTTP-date, always rendered in UTC.
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// `sort_instant == None` is the sentinel: it orders before every real
/// instant, so unparsable bookings group at the top of an ascending sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTime {
    pub sort_instant: Option<DateTime<Utc>>,
    pub display_date: String,
}

/// Turns a booking's start date + start time into a timestamp, read in a
/// fixed offset. `now` is captured once per run and used for every fallback.
#[derive(Clone, Debug)]
pub struct DateResolver {
    offset: FixedOffset,
    now: DateTime<Utc>,
}

impl DateResolver {
    pub fn new(offset: FixedOffset, now: DateTime<Utc>) -> Self {
        Self { offset, now }
    }

    /// Never fails: malformed or missing fields fall back to `now`.
    pub fn resolve(&self, record: &BookingRecord) -> ResolvedTime {
        match self.start_instant(&record.start_date, &record.start_time) {
            Some(instant) => ResolvedTime {
                sort_instant: Some(instant),
                display_date: format_pub_date(instant),
            },
            None => {
                logd!(
                    "No valid start for {:?} {:?}; using current time",
                    record.start_date,
                    record.start_time
                );
                ResolvedTime { sort_instant: None, display_date: format_pub_date(self.now) }
            }
        }
    }

    /// `{date}T{time}:00` in the resolver's offset, e.g. `2025-03-01T09:00:00`.
    pub fn start_instant(&self, date: &str, time: &str) -> Option<DateTime<Utc>> {
        let candidate = join!(date, "T", time, ":00");
        let naive = NaiveDateTime::parse_from_str(&candidate, "%Y-%m-%dT%H:%M:%S").ok()?;
        let local = self.offset.from_local_datetime(&naive).single()?;
        Some(local.with_timezone(&Utc))
    }
}

pub fn format_pub_date(instant: DateTime<Utc>) -> String {
    instant.format(PUB_DATE_FORMAT).to_string()
}

/// Whole-hour offset east of UTC; `None` outside ±23 h.
pub fn offset_hours(hours: i32) -> Option<FixedOffset> {
    if !(-23..=23).contains(&hours) {
        return None;
    }
    FixedOffset::east_opt(hours * 3600)
}
