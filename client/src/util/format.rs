//! Display formatting for API timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Render an ISO-8601 timestamp as `Mar 5, 2024, 02:07 PM` (UTC).
///
/// Unparsable input is returned unchanged so the row still renders.
pub fn format_timestamp(raw: &str) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]");
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| ts.to_offset(time::UtcOffset::UTC).format(&format).ok())
        .unwrap_or_else(|| raw.to_owned())
}
