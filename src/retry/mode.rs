//! Retry mode selection.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Controls how the attempt loop behaves after a retryable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryMode {
    /// Retry silently up to the configured count, with a fixed pause
    /// between attempts.
    #[default]
    Automatic,
    /// Ring the chime and block for explicit user confirmation before each
    /// retry. Declining ends the operation.
    Alert,
    /// Make exactly one attempt. Never waits, never prompts.
    Manual,
}

impl fmt::Display for RetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Automatic => "automatic",
            Self::Alert => "alert",
            Self::Manual => "manual",
        };
        f.write_str(name)
    }
}

impl FromStr for RetryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "automatic" => Ok(Self::Automatic),
            "alert" => Ok(Self::Alert),
            "manual" => Ok(Self::Manual),
            other => Err(Error::validation(
                "mode",
                format!("unrecognized retry mode \"{other}\""),
            )),
        }
    }
}
