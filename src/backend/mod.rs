pub mod waitlist_client;

pub use waitlist_client::{JoinError, JoinOutcome, ListError, WaitlistClient};
