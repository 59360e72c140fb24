//! Terminal progress for batch runs
//!
//! Small batches show one bar per file counting scanned rows. Larger batches
//! show a file counter plus a single row bar reused by whichever file is
//! being tiled.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:24} [{bar:30.cyan/blue}] {pos:>5}/{len} rows")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Row and file progress for one `FileProcessor` run
pub struct ProgressManager {
    multi_progress: MultiProgress,
    file_counter: Option<ProgressBar>,
    row_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            file_counter: None,
            row_bars: Vec::new(),
        }
    }

    /// Allocate bars for a run over `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let batched = file_count > MAX_INDIVIDUAL_PROGRESS_BARS;

        if batched {
            let counter = ProgressBar::new(file_count as u64);
            counter.set_style(FILE_STYLE.clone());
            self.file_counter = Some(self.multi_progress.add(counter));
        }

        let row_bar_count = if batched { 1 } else { file_count };
        self.row_bars = (0..row_bar_count)
            .map(|_| {
                let bar = ProgressBar::new(0);
                bar.set_style(ROW_STYLE.clone());
                self.multi_progress.add(bar)
            })
            .collect();
    }

    fn row_bar(&self, index: usize) -> Option<&ProgressBar> {
        if self.file_counter.is_some() {
            self.row_bars.first()
        } else {
            self.row_bars.get(index)
        }
    }

    /// Point the file's row bar at `path`, which has `rows` rows to scan
    pub fn start_file(&self, index: usize, path: &Path, rows: usize) {
        if let Some(bar) = self.row_bar(index) {
            bar.reset();
            bar.set_length(rows as u64);
            bar.set_message(path.file_name().unwrap_or_default().to_string_lossy().to_string());
        }
    }

    /// Record that `row` is about to be scanned
    pub fn update_row(&self, index: usize, row: usize) {
        if let Some(bar) = self.row_bar(index) {
            bar.set_position(row as u64);
        }
    }

    /// Fill the file's row bar and advance the file counter
    pub fn complete_file(&self, index: usize) {
        if let Some(bar) = self.row_bar(index) {
            bar.set_position(bar.length().unwrap_or(0));
            if self.file_counter.is_none() {
                bar.finish();
            }
        }
        if let Some(counter) = &self.file_counter {
            counter.inc(1);
        }
    }

    /// Close the file counter and clear all bars
    pub fn finish(&self) {
        if let Some(counter) = &self.file_counter {
            counter.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of row bars allocated
    pub fn bar_count(&self) -> usize {
        self.row_bars.len()
    }

    /// Whether a file counter replaces per-file bars
    pub const fn is_batched(&self) -> bool {
        self.file_counter.is_some()
    }
}
