//! Frame rendering progress display

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} frames"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the frames of one animation
///
/// A hidden manager accepts the same calls and draws nothing.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible bar for `frames` frames
    pub fn new(frames: usize, label: &str) -> Self {
        let bar = ProgressBar::new(frames as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_message(label.to_owned());
        Self { bar }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record one more rendered frame
    pub fn frame_rendered(&self) {
        self.bar.inc(1);
    }

    /// Frames recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Replace the label shown next to the bar
    pub fn set_stage(&self, label: &str) {
        self.bar.set_message(label.to_owned());
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
