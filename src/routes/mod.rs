pub mod health;
pub mod home;
pub mod mails;
pub mod waitlist;
