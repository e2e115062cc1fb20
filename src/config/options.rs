// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::FixedOffset;

use super::consts::*;
use crate::core::html::ExtractorKind;
use crate::error::FeedError;
use crate::feed::DescriptionStyle;
use crate::feed::date::offset_hours;

/// Everything one run needs. `Default` is the deployed configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
    pub channel: ChannelOptions,
    /// Hours east of UTC used to read the table's dates.
    pub utc_offset_hours: i32,
    pub description: DescriptionStyle,
    pub parser: ExtractorKind,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            export: ExportOptions::default(),
            channel: ChannelOptions::default(),
            utc_offset_hours: UTC_OFFSET_HOURS,
            description: DescriptionStyle::default(),
            parser: ExtractorKind::default(),
        }
    }
}

impl FeedOptions {
    pub fn offset(&self) -> Result<FixedOffset, FeedError> {
        let hours = self.utc_offset_hours;
        offset_hours(hours).ok_or_else(|| {
            FeedError::Config(format!("UTC offset out of range (-23..=23): {hours}"))
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// Page to fetch; also the channel `<link>`.
    pub url: String,
    /// Read this file instead of fetching `url`.
    pub input: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { url: s!(SOURCE_URL), input: None, timeout_secs: TIMEOUT_SECS }
    }
}

impl SourceOptions {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
    pub to_stdout: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_FILE), to_stdout: false }
    }
}

impl ExportOptions {
    /// Final file path. A directory (existing, or hinted by a trailing
    /// separator) gets the default file name appended.
    pub fn out_path(&self) -> PathBuf {
        let p = &self.out_path;
        if p.as_os_str().is_empty() {
            return PathBuf::from(DEFAULT_OUT_FILE);
        }
        if crate::file::looks_like_dir_hint(p) || p.is_dir() {
            p.join(DEFAULT_OUT_FILE)
        } else {
            p.clone()
        }
    }

    pub fn set_path(&mut self, text: &str) {
        self.out_path = PathBuf::from(crate::file::normalize_separators(text.trim()));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelOptions {
    pub title: String,
    pub description: String,
    pub language: String,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            title: s!(FEED_TITLE),
            description: s!(FEED_DESCRIPTION),
            language: s!(FEED_LANGUAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment() {
        let o = FeedOptions::default();
        assert_eq!(o.offset().unwrap().local_minus_utc(), 2 * 3600);
        assert_eq!(o.export.out_path(), PathBuf::from("feed.xml"));
        assert_eq!(o.description, DescriptionStyle::Cdata);
        assert_eq!(o.parser, ExtractorKind::Scan);
        assert_eq!(o.channel.language, "sv-se");
    }

    #[test]
    fn bad_offset_is_config_error() {
        let o = FeedOptions { utc_offset_hours: 30, ..Default::default() };
        assert!(matches!(o.offset(), Err(FeedError::Config(_))));
    }

    #[test]
    fn zero_timeout_means_none() {
        let mut s = SourceOptions::default();
        assert_eq!(s.timeout(), Some(Duration::from_secs(30)));
        s.timeout_secs = 0;
        assert_eq!(s.timeout(), None);
    }

    #[test]
    fn dir_hint_gets_default_file() {
        let mut e = ExportOptions::default();
        e.set_path("public/");
        assert!(e.out_path().ends_with("feed.xml"));
        e.set_path("public/schema.rss");
        assert!(e.out_path().ends_with("schema.rss"));
        e.set_path("  ");
        assert_eq!(e.out_path(), PathBuf::from("feed.xml"));
    }
}
