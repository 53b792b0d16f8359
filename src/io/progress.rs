//! Progress reporting for the exhaustive mode

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Hands: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress bar wrapper for the all-hands enumeration
///
/// Renders to stderr so solved output on stdout stays clean; quiet mode
/// swaps in a hidden bar.
pub struct EnumerationProgress {
    bar: ProgressBar,
}

impl EnumerationProgress {
    /// Create a bar expecting `total` hands, hidden when `quiet`
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total);
            bar.set_style(BAR_STYLE.clone());
            bar
        };
        Self { bar }
    }

    /// Record one solved hand
    pub fn tick(&self) {
        self.bar.inc(1);
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
