// src/config/consts.rs

// Source
pub const SOURCE_URL: &str = "https://exportservice.actorsmartbook.se/ExportGridStyle.aspx?com=5fe496d9-bdd6-4988-b679-4f249a03a2b6&con=371e91b7-b035-4d08-9c00-3c8bab4bf2de";
pub const USER_AGENT: &str = concat!("booking_feed/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30; // 0 = no client timeout

// Dates
pub const UTC_OFFSET_HOURS: i32 = 2; // fixed, no DST

// Channel
pub const FEED_TITLE: &str = "Friidrottsytor HH – Schema";
pub const FEED_DESCRIPTION: &str = "Automatiskt genererat RSS-flöde från Actorsmartbook";
pub const FEED_LANGUAGE: &str = "sv-se";

// Output
pub const DEFAULT_OUT_FILE: &str = "feed.xml";
