// src/progress.rs
/// Lightweight progress reporting for a run (fetch, parse, write).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the feed is rendered, with its item count.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}
