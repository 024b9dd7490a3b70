//! src/routes/mails/mod.rs

use std::fmt::Formatter;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::backend::{ListError, WaitlistClient};
use crate::domain::WaitlistEntry;
use crate::utils::error_helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum MailsError {
    #[error("{0}")]
    BackendDeclined(String),

    #[error("Failed to fetch emails. Make sure the backend is running.")]
    BackendUnreachable(#[source] ListError),
}

impl From<ListError> for MailsError {
    fn from(e: ListError) -> Self {
        match e {
            ListError::Backend(message) => MailsError::BackendDeclined(message),
            e @ ListError::Unreachable(_) => MailsError::BackendUnreachable(e),
        }
    }
}

impl std::fmt::Debug for MailsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for MailsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(error_page(&self.to_string()))
    }
}

/// Admin listing of every address collected by the waitlist backend.
#[tracing::instrument(name = "Rendering the waitlist emails", skip(waitlist_client))]
pub async fn mails_page(
    waitlist_client: web::Data<WaitlistClient>,
) -> Result<HttpResponse, MailsError> {
    let entries = waitlist_client.list().await.map_err(|e| {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to fetch the waitlist"
        );
        MailsError::from(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(listing_page(&entries)))
}

fn count_line(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} email{} collected", count, plural)
}

fn entry_row(entry: &WaitlistEntry) -> String {
    format!(
        r#"<li class="entry">
                <p class="entry-email">{email}</p>
                <p class="entry-joined">Joined: {joined}</p>
                <span class="copied" hidden>Copied!</span>
                <button type="button" class="copy" data-email="{email_attr}">Copy</button>
            </li>
"#,
        email = htmlescape::encode_minimal(&entry.email),
        joined = htmlescape::encode_minimal(&entry.joined_on()),
        email_attr = htmlescape::encode_attribute(&entry.email),
    )
}

fn listing_page(entries: &[WaitlistEntry]) -> String {
    let rows = if entries.is_empty() {
        r#"<li class="empty">No emails found in the waitlist.</li>"#.to_string()
    } else {
        entries.iter().map(entry_row).collect()
    };
    let count = count_line(entries.len());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Waitlist Emails</title>
</head>
<body>
    <header>
        <h1>Waitlist Emails</h1>
        <p>{count}</p>
    </header>
    <section>
        <h2>All Emails</h2>
        <ul>
            {rows}
        </ul>
    </section>
    <p><a class="refresh" href="/mails">Refresh</a></p>
    <script>
        document.querySelectorAll("button.copy").forEach(function (button) {{
            button.addEventListener("click", function () {{
                navigator.clipboard.writeText(button.dataset.email).then(function () {{
                    var marker = button.previousElementSibling;
                    marker.hidden = false;
                    setTimeout(function () {{ marker.hidden = true; }}, 2000);
                }});
            }});
        }});
    </script>
</body>
</html>"#,
    )
}

fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Waitlist Emails</title>
</head>
<body>
    <div class="error" role="alert">
        <p>{}</p>
    </div>
    <p><a class="retry" href="/mails">Retry</a></p>
</body>
</html>"#,
        htmlescape::encode_minimal(message)
    )
}
