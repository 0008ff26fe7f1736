//! Redacting log formatter.
//!
//! Renders records as `[PIIGUARD] <target> <LEVEL> <timestamp>: <message>`
//! and masks sensitive field values before the line leaves the process.

use log::Level;
use regex::Regex;

use crate::redaction::filter::{build_extract_pattern, build_replacement};

/// Formatter that redacts sensitive `key=value` pairs in every record.
#[derive(Debug, Clone)]
pub struct RedactingFormatter {
    fields: Vec<String>,
    // None when the field set is empty
    pattern: Option<Regex>,
}

impl RedactingFormatter {
    /// Replacement for sensitive values.
    pub const REDACTION: &'static str = "***";

    /// Pair separator in formatted messages.
    pub const SEPARATOR: char = ';';

    /// Tag prefixed to every emitted line.
    pub const APP_TAG: &'static str = "PIIGUARD";

    /// Create a formatter for a fixed field set.
    ///
    /// The extraction pattern is compiled once here; the field set
    /// cannot change afterwards.
    pub fn new(fields: &[&str]) -> Self {
        let pattern = if fields.is_empty() {
            None
        } else {
            Some(build_extract_pattern(fields, Self::SEPARATOR))
        };

        Self {
            fields: fields.iter().map(|field| field.to_string()).collect(),
            pattern,
        }
    }

    /// Field names this formatter masks.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Mask sensitive values in a message.
    pub fn redact(&self, message: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern
                .replace_all(message, build_replacement(Self::REDACTION))
                .into_owned(),
            None => message.to_string(),
        }
    }

    /// Render a full log line, then redact it.
    pub fn format_line(&self, target: &str, level: Level, timestamp: &str, message: &str) -> String {
        let line = format!(
            "[{}] {} {} {}: {}",
            Self::APP_TAG,
            target,
            level,
            timestamp,
            message
        );
        self.redact(&line)
    }
}
