//! Display-id parsing and formatting for media items.
//!
//! Every media item carries a human-readable identifier that is unique
//! within its (workspace, category) scope: `BB-<n>` for billboards,
//! `SP-<n>` for street poles. The numeric suffix is a sequence number
//! starting at 1 per scope.

use std::fmt;

/// Display-id prefix for billboard media items.
pub const BILLBOARD_PREFIX: &str = "BB";
/// Display-id prefix for street-pole media items.
pub const STREET_POLE_PREFIX: &str = "SP";

/// Error type for display-id parsing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdError {
    message: String,
}

impl DisplayIdError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DisplayIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DisplayIdError {}

/// Result type for display-id parsing operations
pub type DisplayIdResult<T> = std::result::Result<T, DisplayIdError>;

/// Format a display id from a prefix and a sequence number
/// Example: `format_display_id("BB", 4)` -> `"BB-4"`
pub fn format_display_id(prefix: &str, number: i64) -> String {
    format!("{}-{}", prefix, number)
}

/// Parse a display id of the form `<PREFIX>-<n>`, where the prefix is one
/// or more ASCII uppercase letters and `n` is a decimal number. Returns
/// the prefix and the sequence number.
pub fn parse_display_id(display_id: &str) -> DisplayIdResult<(&str, i64)> {
    let (prefix, number_str) = display_id.split_once('-').ok_or_else(|| {
        DisplayIdError::new(format!("invalid display id format: {}", display_id))
    })?;

    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(DisplayIdError::new(format!(
            "invalid display id prefix: {}",
            display_id
        )));
    }

    if number_str.is_empty() || !number_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DisplayIdError::new(format!(
            "invalid display id number: {}",
            display_id
        )));
    }

    let number = number_str.parse::<i64>().map_err(|_| {
        DisplayIdError::new(format!("display id number out of range: {}", display_id))
    })?;

    Ok((prefix, number))
}
