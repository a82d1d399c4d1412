//! Progress bar styling and display options.
//!
//! Downloads render a byte-progress bar while streaming, and automatic
//! retries render a countdown while pausing. Both honor the same
//! [`ProgressOpts`], so embedders can hide them entirely.
//!
//! # Examples
//!
//! ```rust
//! use stubborn::progress::ProgressOpts;
//! use stubborn::FetcherBuilder;
//!
//! // No bars, for scripted use.
//! let fetcher = FetcherBuilder::new().progress(ProgressOpts::hidden()).build();
//! ```

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display options.
#[derive(Debug, Clone)]
pub struct ProgressOpts {
    /// Template of the download transfer bar.
    pub template: Option<String>,
    /// Characters used to draw the bars.
    pub progress_chars: Option<String>,
    /// Whether any bar is shown at all.
    pub enabled: bool,
}

impl ProgressOpts {
    /// Template used while streaming a download to disk.
    pub const TEMPLATE_TRANSFER: &'static str =
        "{bar:40.cyan/blue} {bytes:>10}/{total_bytes:10} {wide_msg}";

    /// Template used while counting down to the next automatic retry.
    pub const TEMPLATE_COUNTDOWN: &'static str = "{bar:40.yellow/blue} {pos:>2}/{len:2}s {wide_msg}";

    /// Options with every bar hidden.
    pub fn hidden() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: false,
        }
    }

    /// Builds the transfer bar for a download of `length` bytes, when known.
    pub(crate) fn transfer_bar(&self, length: Option<u64>) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        let bar = match length {
            Some(length) => ProgressBar::new(length),
            None => ProgressBar::new_spinner(),
        };
        let template = self.template.as_deref().unwrap_or(Self::TEMPLATE_TRANSFER);
        bar.set_style(self.style(template));
        bar
    }

    /// Builds the countdown bar for a retry pause of `seconds`.
    pub(crate) fn countdown_bar(&self, seconds: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(seconds);
        bar.set_style(self.style(Self::TEMPLATE_COUNTDOWN));
        bar
    }

    fn style(&self, template: &str) -> ProgressStyle {
        let style =
            ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar());
        match &self.progress_chars {
            Some(chars) => style.progress_chars(chars),
            None => style,
        }
    }
}

impl Default for ProgressOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert!(ProgressOpts::default().enabled);
    }

    #[test]
    fn test_hidden_is_disabled() {
        let opts = ProgressOpts::hidden();
        assert!(!opts.enabled);
        assert!(opts.transfer_bar(Some(1024)).is_hidden());
        assert!(opts.countdown_bar(5).is_hidden());
    }

    #[test]
    fn test_transfer_bar_with_length() {
        let opts = ProgressOpts::default();
        let bar = opts.transfer_bar(Some(2048));
        assert_eq!(bar.length(), Some(2048));
    }

    #[test]
    fn test_countdown_bar_length() {
        let opts = ProgressOpts::default();
        let bar = opts.countdown_bar(5);
        assert_eq!(bar.length(), Some(5));
    }

    #[test]
    fn test_custom_template_is_used() {
        let opts = ProgressOpts {
            template: Some("{bytes}".to_string()),
            progress_chars: Some("=> ".to_string()),
            enabled: true,
        };
        let bar = opts.transfer_bar(Some(10));
        assert!(!bar.is_hidden());
    }
}
