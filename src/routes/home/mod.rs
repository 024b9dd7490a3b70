//! src/routes/home/mod.rs

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use actix_web_flash_messages::{IncomingFlashMessages, Level};

/// The "coming soon" landing page with the notify form.
///
/// Outcomes of `POST /waitlist` arrive as flash messages: errors are listed under
/// the form, an info message opens the welcome popup.
pub async fn home(flash_messages: IncomingFlashMessages) -> HttpResponse {
    let error_html: String = flash_messages
        .iter()
        .filter(|m| m.level() == Level::Error)
        .map(|m| {
            format!(
                "<p class=\"form-error\">{}</p>\n",
                htmlescape::encode_minimal(m.content())
            )
        })
        .collect();

    let popup_html = flash_messages
        .iter()
        .find(|m| m.level() == Level::Info)
        .map(|m| welcome_popup(m.content()))
        .unwrap_or_default();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>VASTRAHIRE - Coming Soon</title>
</head>
<body>
    <header>
        <h1>VASTRAHIRE</h1>
        <p>Your Fashion Rental Destination</p>
    </header>
    <main>
        <h2>Coming <span>Soon</span></h2>
        <p>
            Your dream fashion rental platform is almost here!
            Rent <strong>all type of clothes</strong>, stylish <strong>shoes</strong>,
            and elegant <strong>jewelry</strong>, all at your fingertips.
        </p>
        <p>Launching soon <strong>VASTRAHIRE</strong></p>
        <form id="notify-form" action="/waitlist" method="post">
            <input type="email" name="email" placeholder="Enter your email" required>
            <button type="submit">Notify Me</button>
        </form>
        {error_html}
    </main>
    {popup_html}
    <script>
        document.getElementById("notify-form").addEventListener("submit", function () {{
            var button = this.querySelector("button");
            button.disabled = true;
            button.textContent = "Processing...";
            this.querySelector("input").readOnly = true;
        }});
    </script>
</body>
</html>"#,
        ))
}

fn welcome_popup(message: &str) -> String {
    format!(
        r#"<div class="popup" role="dialog">
        <a class="popup-close" href="/" aria-label="Close">&#x2715;</a>
        <h2>{}</h2>
        <p><em>You&apos;ll be notified soon through email about our launch and exclusive offers.</em></p>
        <p>Welcome to <strong>VASTRAHIRE</strong> family!</p>
    </div>"#,
        htmlescape::encode_minimal(message)
    )
}
