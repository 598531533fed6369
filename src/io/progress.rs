//! Progress display for batch rendering runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Renders: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across the variations of a batch run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the number of variations
    pub fn new(count: usize) -> Self {
        let bar = ProgressBar::new(count as u64);
        bar.set_style(BATCH_STYLE.clone());

        Self { bar }
    }

    /// Announce the variation currently being rendered
    pub fn start_variation(&self, seed: u64) {
        self.bar.set_message(format!("seed {seed}"));
    }

    /// Mark one variation as completed
    pub fn complete_variation(&self) {
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressManager;

    // Progress is cosmetic; this only exercises the lifecycle without a terminal
    #[test]
    fn test_lifecycle_is_silent_without_terminal() {
        let manager = ProgressManager::new(3);
        manager.start_variation(42);
        manager.complete_variation();
        manager.finish();
    }
}
