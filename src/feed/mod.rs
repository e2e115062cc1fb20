// src/feed/mod.rs
//
// Records -> dated, ordered feed items -> RSS document.

pub mod date;
pub mod record;
pub mod rss;

use chrono::{DateTime, Utc};

use crate::config::options::ChannelOptions;
use date::DateResolver;
use record::BookingRecord;

pub use rss::{escape_xml, render};

/// How an item's description is carried in the XML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DescriptionStyle {
    /// HTML block inside CDATA, values left as-is
    #[default]
    Cdata,
    /// Plain `Label: value` lines, XML-escaped
    Escaped,
}

/// Description body, already laid out; escaping happens at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Description {
    Cdata(String),
    Text(String),
}

impl Description {
    pub fn as_str(&self) -> &str {
        match self {
            Description::Cdata(s) | Description::Text(s) => s,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub description: Description,
    pub pub_date: String,
    sort_instant: Option<DateTime<Utc>>,
}

/// Static `<channel>` metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
}

impl Channel {
    pub fn new(link: &str, opts: &ChannelOptions) -> Self {
        Self {
            title: opts.title.clone(),
            link: s!(link),
            description: opts.description.clone(),
            language: opts.language.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feed {
    pub channel: Channel,
    pub items: Vec<FeedItem>,
}

/* ---------------- item layout ---------------- */

const LABEL_SUBJECT: &str = "Objekt";
const LABEL_INFO: &str = "Information";
const LABEL_START_DATE: &str = "Startdatum";
const LABEL_END_DATE: &str = "Slutdatum";
const LABEL_WEEKDAY: &str = "Veckodag";
const LABEL_TIME: &str = "Tid";

/// `{subject} – {weekday} {start}-{end}`
pub fn item_title(r: &BookingRecord) -> String {
    format!("{} – {} {}-{}", r.subject, r.weekday, r.start_time, r.end_time)
}

fn description_fields(r: &BookingRecord) -> [(&'static str, String); 6] {
    [
        (LABEL_SUBJECT, r.subject.clone()),
        (LABEL_INFO, r.info.clone()),
        (LABEL_START_DATE, r.start_date.clone()),
        (LABEL_END_DATE, r.end_date.clone()),
        (LABEL_WEEKDAY, r.weekday.clone()),
        (LABEL_TIME, join!(&r.start_time, " - ", &r.end_time)),
    ]
}

pub fn item_description(r: &BookingRecord, style: DescriptionStyle) -> Description {
    let fields = description_fields(r);
    match style {
        DescriptionStyle::Cdata => {
            let mut block = s!("\n");
            for (label, value) in &fields {
                block.push_str(&format!("  <p><strong>{label}:</strong> {value}</p>\n"));
            }
            Description::Cdata(block)
        }
        DescriptionStyle::Escaped => Description::Text(
            fields
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    }
}

/// One item per record (unparsable dates included), then a stable ascending
/// sort on the start instant. Sentinel items keep their document order.
pub fn assemble(
    records: &[BookingRecord],
    channel: Channel,
    resolver: &DateResolver,
    style: DescriptionStyle,
) -> Feed {
    let mut items: Vec<FeedItem> = records
        .iter()
        .map(|r| {
            let time = resolver.resolve(r);
            FeedItem {
                title: item_title(r),
                description: item_description(r, style),
                pub_date: time.display_date,
                sort_instant: time.sort_instant,
            }
        })
        .collect();

    items.sort_by_key(|item| item.sort_instant);

    let undated = items.iter().take_while(|i| i.sort_instant.is_none()).count();
    if undated > 0 {
        logd!("{undated} of {} item(s) had no usable start date", items.len());
    }

    Feed { channel, items }
}
