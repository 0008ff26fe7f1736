//! Logging for user-data records.
//!
//! A single INFO-level sink whose only format hook redacts sensitive
//! field values before emission.

pub mod redacting;

pub use redacting::*;

use std::io::Write;

use chrono::Utc;
use log::LevelFilter;

use crate::redaction::filter::PII_FIELDS;

/// Target used for user-data records.
///
/// Emit through it with `log::info!(target: USER_DATA_TARGET, ...)`.
pub const USER_DATA_TARGET: &str = "user_data";

/// Install the global redacting logger at INFO level.
///
/// The formatter and its field set are fixed here; there is no
/// reconfiguration API. Safe to call more than once, later calls keep
/// the first sink.
pub fn init_user_data_logger() {
    let formatter = RedactingFormatter::new(PII_FIELDS);

    let _ = env_logger::builder()
        .filter_level(LevelFilter::Info)
        .format(move |buf, record| {
            let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            writeln!(
                buf,
                "{}",
                formatter.format_line(
                    record.target(),
                    record.level(),
                    &timestamp,
                    &record.args().to_string(),
                )
            )
        })
        .try_init();
}
