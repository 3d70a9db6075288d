//! Progress bar display for downloads

use indicatif::{ProgressBar, ProgressStyle};

const SIZED_TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})";
const UNSIZED_TEMPLATE: &str = "{spinner} {msg} {bytes} ({bytes_per_sec})";

/// Progress display for a single download
///
/// Draws to stderr; indicatif hides the bar when stderr is not a terminal.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Create a bar for a download of `total` bytes, or a spinner when unknown
    pub fn new(label: &str, total: Option<u64>) -> Self {
        let (bar, template) = match total {
            Some(len) if len > 0 => (ProgressBar::new(len), SIZED_TEMPLATE),
            _ => (ProgressBar::no_length(), UNSIZED_TEMPLATE),
        };

        // Keeps the default style if the template fails to parse
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(label.to_string());

        Self { bar }
    }

    pub fn advance(&self, bytes: u64) {
        self.bar.inc(bytes);
    }

    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}
