// src/runner.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::{
    config::options::FeedOptions,
    core::net,
    error::FeedError,
    feed::{self, Channel, date::DateResolver, record},
    file,
    progress::Progress,
};

/// What `generate` produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub rows: usize,
    pub items: usize,
    pub xml: String,
}

/// Summary of a finished run. `path` is `None` when the feed went to stdout.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub items: usize,
    pub path: Option<PathBuf>,
    pub xml: String,
}

/// Pure pipeline: extract -> map -> resolve -> assemble -> render.
/// Same `html` and `now` always give the same bytes.
pub fn generate(
    html: &str,
    opts: &FeedOptions,
    now: DateTime<Utc>,
) -> Result<Generated, FeedError> {
    let resolver = DateResolver::new(opts.offset()?, now);

    let rows = opts.parser.extractor().extract_rows(html);
    let records = record::map_rows(&rows);
    logd!("{} row(s), {} booking(s)", rows.len(), records.len());

    let channel = Channel::new(&opts.source.url, &opts.channel);
    let feed = feed::assemble(&records, channel, &resolver, opts.description);
    let xml = feed::render(&feed)?;

    Ok(Generated { rows: rows.len(), items: feed.items.len(), xml })
}

/// Load the source document: a local file when `input` is set, else a GET.
pub fn load_source(opts: &FeedOptions) -> Result<String, FeedError> {
    match &opts.source.input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| FeedError::io(path, e)),
        None => net::http_get(&opts.source.url, opts.source.timeout()),
    }
}

/// Fetch, generate, write. Nothing is written unless every earlier step succeeded.
pub fn run(
    opts: &FeedOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, FeedError> {
    // Fail on bad config before touching the network.
    opts.offset()?;

    if let Some(p) = progress.as_deref_mut() {
        match &opts.source.input {
            Some(path) => p.log(&format!("Reading {}", path.display())),
            None => p.log(&format!("Fetching {}", opts.source.url)),
        }
    }
    let html = load_source(opts)?;

    let generated = generate(&html, opts, Utc::now())?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(generated.items);
        p.log(&format!("Parsed {} row(s) into {} item(s)", generated.rows, generated.items));
    }

    let path = if opts.export.to_stdout {
        None
    } else {
        Some(file::write_feed(&opts.export.out_path(), &generated.xml)?)
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary { items: generated.items, path, xml: generated.xml })
}
