//! src/routes/waitlist/mod.rs

use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web_flash_messages::FlashMessage;

use crate::backend::{JoinError, JoinOutcome, WaitlistClient};
use crate::domain::WaitlistEmail;
use crate::utils::see_other;

pub const JOINED: &str = "You have joined the exclusive offer list!";
pub const ALREADY_LISTED: &str = "This email is already on our waitlist!";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const UNEXPECTED_RESPONSE: &str = "Something went wrong. Please try again.";
pub const SUBSCRIBE_FAILED: &str = "Failed to subscribe. Please try again.";

#[derive(serde::Deserialize)]
pub struct JoinForm {
    #[serde(default)]
    email: String,
}

/// Forwards the notify form to the waitlist backend and redirects back to the
/// landing page with the outcome as a flash message.
#[tracing::instrument(
    name = "Joining the waitlist",
    skip(form, waitlist_client),
    fields(waitlist_email = %form.email)
)]
pub async fn join_waitlist(
    form: web::Form<JoinForm>,
    waitlist_client: web::Data<WaitlistClient>,
) -> HttpResponse {
    let email = match WaitlistEmail::parse(form.0.email) {
        Ok(email) => email,
        Err(e) => {
            tracing::warn!(error.message = %e, "Rejected an invalid waitlist email");
            FlashMessage::error(INVALID_EMAIL).send();
            return see_other("/");
        }
    };

    match waitlist_client.join(&email).await {
        Ok(JoinOutcome::Joined) => {
            tracing::info!("Email joined the waitlist");
            FlashMessage::info(JOINED).send();
        }
        Ok(JoinOutcome::AlreadyListed) => {
            tracing::info!("Email is already on the waitlist");
            FlashMessage::error(ALREADY_LISTED).send();
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to join the waitlist"
            );
            FlashMessage::error(failure_message(e)).send();
        }
    }

    see_other("/")
}

/// `FormConfig` error handler for `POST /waitlist`: a body that is not a
/// urlencoded form is treated like an invalid address.
pub fn reject_malformed_form(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error.message = %err, "Rejected a malformed waitlist form");
    FlashMessage::error(INVALID_EMAIL).send();
    InternalError::from_response(err, see_other("/")).into()
}

fn failure_message(e: JoinError) -> String {
    match e {
        JoinError::UnexpectedStatus(_) => UNEXPECTED_RESPONSE.to_string(),
        JoinError::Rejected {
            message: Some(message),
            ..
        } => message,
        JoinError::Rejected { message: None, .. } | JoinError::Transport(_) => {
            SUBSCRIBE_FAILED.to_string()
        }
    }
}
