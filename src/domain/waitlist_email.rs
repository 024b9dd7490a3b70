//! src/domain/waitlist_email.rs

use validator::validate_email;

/// An address accepted by the notify form, trimmed and syntactically valid.
#[derive(Debug, Clone)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(s: String) -> Result<WaitlistEmail, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("An empty string is not a valid email address.".to_string());
        }

        if !validate_email(trimmed) {
            return Err(format!("{} is not a valid email address.", s));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
