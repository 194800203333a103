//! Timestamp parsing and formatting utilities.
//!
//! Form fields and model output use clock-style timestamps (`m:ss`, `mm:ss`,
//! or `HH:MM:SS`). These helpers convert between that shape and seconds,
//! mainly for deriving a segment end time during the script prefill hand-off.

use thiserror::Error;

/// Error parsing a clock-style timestamp.
#[derive(Debug, Error, PartialEq)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,
    #[error("invalid {0} component: {1}")]
    InvalidValue(&'static str, String),
    #[error("timestamp components cannot be negative")]
    Negative,
    #[error("invalid timestamp format: {0}")]
    InvalidFormat(String),
}

/// Parse a timestamp string to total seconds.
///
/// Supports `HH:MM:SS`, `MM:SS`, and bare `SS`, with optional fractional
/// seconds.
pub fn parse_timestamp(ts: &str) -> Result<f64, TimestampError> {
    let ts = ts.trim();
    if ts.is_empty() {
        return Err(TimestampError::Empty);
    }

    let parts: Vec<&str> = ts.split(':').collect();
    match parts.len() {
        1 => {
            let seconds: f64 = parts[0]
                .parse()
                .map_err(|_| TimestampError::InvalidValue("seconds", parts[0].to_string()))?;
            if seconds < 0.0 {
                return Err(TimestampError::Negative);
            }
            Ok(seconds)
        }
        2 => {
            let minutes: f64 = parts[0]
                .parse()
                .map_err(|_| TimestampError::InvalidValue("minutes", parts[0].to_string()))?;
            let seconds: f64 = parts[1]
                .parse()
                .map_err(|_| TimestampError::InvalidValue("seconds", parts[1].to_string()))?;
            if minutes < 0.0 || seconds < 0.0 {
                return Err(TimestampError::Negative);
            }
            Ok(minutes * 60.0 + seconds)
        }
        3 => {
            let hours: f64 = parts[0]
                .parse()
                .map_err(|_| TimestampError::InvalidValue("hours", parts[0].to_string()))?;
            let minutes: f64 = parts[1]
                .parse()
                .map_err(|_| TimestampError::InvalidValue("minutes", parts[1].to_string()))?;
            let seconds: f64 = parts[2]
                .parse()
                .map_err(|_| TimestampError::InvalidValue("seconds", parts[2].to_string()))?;
            if hours < 0.0 || minutes < 0.0 || seconds < 0.0 {
                return Err(TimestampError::Negative);
            }
            Ok(hours * 3600.0 + minutes * 60.0 + seconds)
        }
        _ => Err(TimestampError::InvalidFormat(ts.to_string())),
    }
}

/// Format whole seconds as `m:ss` (the shape the script form expects).
pub fn format_timestamp(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}
