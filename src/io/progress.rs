//! Progress display for maze batches and grid loading

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix}: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over one batch of work items
///
/// Log lines emitted through [`ProgressManager::report`] are printed above the
/// bar instead of tearing it.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no active bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Start a bar for `total` items labelled `label`
    pub fn initialize(&mut self, label: &str, total: usize) {
        self.finish();
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bar = Some(bar);
        self.completed = 0;
    }

    /// Mark one item done and show its name
    pub fn complete_item(&mut self, name: &str) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Run `f` with the bar hidden, e.g. to emit a log line
    pub fn report<F: FnOnce()>(&self, f: F) {
        match self.bar {
            Some(ref bar) => bar.suspend(f),
            None => f(),
        }
    }

    /// Number of items completed since the last `initialize`
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Remove the bar from the terminal
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
