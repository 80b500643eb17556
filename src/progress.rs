// src/progress.rs
/// Progress reporting for the per-player fetch loop.
/// The binary prints to stdout; tests and library callers can pass `NullProgress`.
pub trait Progress {
    /// Called at the start with the total number of members to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One member handled; `fetched` is false when the detail call failed.
    fn item_done(&mut self, _index: usize, _name: &str, _fetched: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Single rewritten console line: `Fetching player 3/42: Name`.
pub struct ConsoleProgress {
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { total: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("\nFetching detailed info for {total} players...");
    }

    fn log(&mut self, msg: &str) {
        println!("\r   {msg:<60}");
    }

    fn item_done(&mut self, index: usize, name: &str, _fetched: bool) {
        use std::io::Write;
        print!("\r   Fetching player {}/{}: {:<30}", index + 1, self.total, name);
        let _ = std::io::stdout().flush();
    }

    fn finish(&mut self) {
        println!("\r{:60}", "");
    }
}
