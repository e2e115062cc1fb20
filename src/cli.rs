// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_OUT_FILE, SOURCE_URL, TIMEOUT_SECS, UTC_OFFSET_HOURS};
use crate::config::options::FeedOptions;
use crate::core::html::ExtractorKind;
use crate::feed::DescriptionStyle;
use crate::progress::Progress;

/// Fetch the booking schedule and write it as an RSS 2.0 feed.
#[derive(Debug, Parser)]
#[command(name = "booking-feed", version, about)]
pub struct Args {
    /// Schedule page to fetch (also the channel link)
    #[arg(long, env = "BOOKING_FEED_URL", default_value = SOURCE_URL)]
    pub url: String,

    /// Read HTML from this file instead of fetching --url
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (a directory gets feed.xml)
    #[arg(short, long, env = "BOOKING_FEED_OUT", default_value = DEFAULT_OUT_FILE)]
    pub out: String,

    /// Print the feed instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Hours east of UTC the schedule's times are in
    #[arg(long, default_value_t = UTC_OFFSET_HOURS, allow_hyphen_values = true)]
    pub offset_hours: i32,

    /// How item descriptions are embedded
    #[arg(long, value_enum, default_value_t = DescriptionStyle::Cdata)]
    pub description: DescriptionStyle,

    /// Table extraction backend
    #[arg(long, value_enum, default_value_t = ExtractorKind::Scan)]
    pub parser: ExtractorKind,

    /// Channel title
    #[arg(long)]
    pub title: Option<String>,

    /// Channel language tag
    #[arg(long)]
    pub language: Option<String>,

    /// Channel description
    #[arg(long)]
    pub channel_description: Option<String>,

    /// Request timeout in seconds (0 = none)
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Suppress progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> FeedOptions {
        let mut opts = FeedOptions::default();
        opts.source.url = self.url;
        opts.source.input = self.input;
        opts.source.timeout_secs = self.timeout_secs;
        opts.export.set_path(&self.out);
        opts.export.to_stdout = self.stdout;
        opts.utc_offset_hours = self.offset_hours;
        opts.description = self.description;
        opts.parser = self.parser;
        if let Some(t) = self.title {
            opts.channel.title = t;
        }
        if let Some(l) = self.language {
            opts.channel.language = l;
        }
        if let Some(d) = self.channel_description {
            opts.channel.description = d;
        }
        opts
    }
}

/// Stage lines on stderr, keeping stdout free for `--stdout`.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    execute(args)?;
    Ok(())
}

/// Runs the pipeline for parsed arguments. Failures are returned untouched;
/// reporting them is left to the caller.
pub fn execute(args: Args) -> Result<(), crate::FeedError> {
    let quiet = args.quiet;
    let opts = args.into_options();

    let mut console = ConsoleProgress;
    let progress: Option<&mut dyn Progress> = if quiet { None } else { Some(&mut console) };

    let summary = crate::runner::run(&opts, progress)?;

    match &summary.path {
        Some(path) => println!("RSS feed generated: {} items -> {}", summary.items, path.display()),
        None => print!("{}", summary.xml),
    }
    Ok(())
}
