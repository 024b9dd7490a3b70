//! src/domain/waitlist_entry.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const JOINED_FORMAT: &str = "%b %-d, %Y";

/// One collected address as reported by the waitlist backend.
///
/// `created_at` is kept as sent: a timestamp the site cannot read must not
/// hide the rest of the listing.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

impl WaitlistEntry {
    /// RFC 3339 timestamps keep their own date, offset-less ones are read as is,
    /// anything else is shown verbatim.
    pub fn joined_on(&self) -> String {
        let raw = self.created_at.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return timestamp.format(JOINED_FORMAT).to_string();
        }
        if let Ok(timestamp) = raw.parse::<NaiveDateTime>() {
            return timestamp.format(JOINED_FORMAT).to_string();
        }
        if let Ok(date) = raw.parse::<NaiveDate>() {
            return date.format(JOINED_FORMAT).to_string();
        }

        raw.to_string()
    }
}

/// Response body of the listing endpoint.
///
/// `data` is absent on failures, so it falls back to an empty list.
#[derive(serde::Deserialize, Debug)]
pub struct ListingEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<WaitlistEntry>,
    pub message: Option<String>,
}
