// src/progress.rs
/// Lightweight progress reporting for the trip page load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to fetch.
    fn begin(&mut self, _total: usize) {}

    /// One page fetched and parsed into a record.
    fn item_done(&mut self, _index: usize, _location: &str) {}

    /// One page skipped (unreachable or no usable trip data).
    fn item_failed(&mut self, _index: usize, _location: &str) {}

    /// Called at the end, even when every page failed.
    fn finish(&mut self) {}
}
