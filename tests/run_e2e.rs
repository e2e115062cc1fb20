// tests/run_e2e.rs
//
// `runner::run` against local input files; output lands in temp dirs.

use std::fs;
use std::path::PathBuf;

use booking_feed::FeedError;
use booking_feed::config::options::FeedOptions;
use booking_feed::progress::Progress;
use booking_feed::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("booking_feed_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/schedule.html")
}

fn opts_for(dir: &PathBuf) -> FeedOptions {
    let mut opts = FeedOptions::default();
    opts.source.input = Some(fixture());
    opts.export.set_path(dir.join("feed.xml").to_str().unwrap());
    opts
}

#[derive(Default)]
struct Recorder {
    total: Option<usize>,
    lines: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn writes_feed_file_from_local_input() {
    let dir = tmp_dir("write");
    let opts = opts_for(&dir);

    let mut rec = Recorder::default();
    let summary = runner::run(&opts, Some(&mut rec)).unwrap();

    assert_eq!(summary.items, 4);
    let path = summary.path.unwrap();
    assert_eq!(path, dir.join("feed.xml"));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, summary.xml);
    assert!(written.contains("<title>Arena A – Sat 09:00-10:00</title>"));

    assert_eq!(rec.total, Some(4));
    assert!(rec.lines[0].starts_with("Reading "));
    assert!(rec.finished);
}

#[test]
fn replaces_previous_output() {
    let dir = tmp_dir("replace");
    fs::write(dir.join("feed.xml"), "stale").unwrap();
    runner::run(&opts_for(&dir), None).unwrap();
    let s = fs::read_to_string(dir.join("feed.xml")).unwrap();
    assert!(s.starts_with("<?xml"));
}

#[test]
fn directory_output_gets_default_name() {
    let dir = tmp_dir("dir_out");
    let mut opts = opts_for(&dir);
    opts.export.set_path(&format!("{}/public/", dir.display()));
    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.path.unwrap(), dir.join("public").join("feed.xml"));
}

#[test]
fn stdout_mode_writes_nothing() {
    let dir = tmp_dir("stdout");
    let mut opts = opts_for(&dir);
    opts.export.to_stdout = true;
    let summary = runner::run(&opts, None).unwrap();
    assert!(summary.path.is_none());
    assert!(summary.xml.contains("<rss version=\"2.0\">"));
    assert!(!dir.join("feed.xml").exists());
}

#[test]
fn failed_load_leaves_old_output_alone() {
    let dir = tmp_dir("missing");
    fs::write(dir.join("feed.xml"), "previous").unwrap();
    let mut opts = opts_for(&dir);
    opts.source.input = Some(dir.join("does-not-exist.html"));

    let mut rec = Recorder::default();
    let err = runner::run(&opts, Some(&mut rec)).unwrap_err();
    assert!(matches!(err, FeedError::Io { .. }));
    assert_eq!(fs::read_to_string(dir.join("feed.xml")).unwrap(), "previous");
    // No feed was rendered, so no item count was announced.
    assert_eq!(rec.total, None);
    assert!(!rec.finished);
}

#[test]
fn bad_offset_fails_before_any_io() {
    let dir = tmp_dir("offset");
    let mut opts = opts_for(&dir);
    opts.utc_offset_hours = 99;
    let err = runner::run(&opts, None).unwrap_err();
    assert!(matches!(err, FeedError::Config(_)));
    assert!(!dir.join("feed.xml").exists());
}
