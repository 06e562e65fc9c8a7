//! Progress bar display for installations

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress display for a batch of script copies
pub struct ProgressDisplay {
    pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total script count
    pub fn new(total: u64) -> Self {
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("#>-"));
        }
        Self { pb }
    }

    /// A display that never draws (tests, dry runs)
    pub fn hidden() -> Self {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        Self { pb }
    }

    /// Show the script currently being copied
    pub fn update(&self, name: &str) {
        self.pb.set_message(name.to_string());
    }

    /// Count one script as handled
    pub fn inc(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_display_counts() {
        let display = ProgressDisplay::hidden();
        display.update("a.sh");
        display.inc();
        display.inc();
        assert_eq!(display.pb.position(), 2);
        display.finish();
    }
}
