mod waitlist_email;
mod waitlist_entry;

pub use waitlist_email::WaitlistEmail;
pub use waitlist_entry::{ListingEnvelope, WaitlistEntry};
