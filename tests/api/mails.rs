use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

fn entry(id: &str, email: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "email": email, "createdAt": created_at })
}

#[tokio::test]
async fn mails_page_lists_every_collected_email() {
    let app = spawn_app().await;

    Mock::given(path("/api/v1/waitlist/mails"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [
                entry("1", "ursula@domain.com", "2025-03-07T18:24:05Z"),
                entry("2", "octavia@domain.com", "2025-03-09T08:00:00Z"),
            ],
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.get_mails().await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Waitlist Emails"));
    assert!(html.contains("2 emails collected"));
    assert!(html.contains("ursula@domain.com"));
    assert!(html.contains("octavia@domain.com"));
    assert!(html.contains("Joined: Mar 7, 2025"));
    assert!(html.contains("Joined: Mar 9, 2025"));
}

#[tokio::test]
async fn mails_page_uses_the_singular_for_one_email() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [entry("1", "ursula@domain.com", "2025-03-07T18:24:05Z")],
        })))
        .mount(&app.backend)
        .await;

    let html = app.get_mails().await.text().await.unwrap();

    assert!(html.contains("1 email collected"));
}

#[tokio::test]
async fn mails_page_reports_an_empty_waitlist() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true, "data": [] })),
        )
        .mount(&app.backend)
        .await;

    let response = app.get_mails().await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("0 emails collected"));
    assert!(html.contains("No emails found in the waitlist."));
}

#[tokio::test]
async fn mails_page_shows_the_backend_failure_message() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "Database unavailable",
        })))
        .mount(&app.backend)
        .await;

    let response = app.get_mails().await;

    assert_eq!(response.status().as_u16(), 502);
    let html = response.text().await.unwrap();
    assert!(html.contains("Database unavailable"));
    assert!(html.contains(r#"href="/mails">Retry</a>"#));
}

#[tokio::test]
async fn mails_page_asks_to_check_the_backend_when_it_is_down() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.backend)
        .await;

    let response = app.get_mails().await;

    assert_eq!(response.status().as_u16(), 502);
    let html = response.text().await.unwrap();
    assert!(html.contains("Failed to fetch emails. Make sure the backend is running."));
    assert!(html.contains(r#"href="/mails">Retry</a>"#));
}

#[tokio::test]
async fn mails_page_offers_copy_and_refresh_controls() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [entry("1", "ursula@domain.com", "2025-03-07T18:24:05Z")],
        })))
        .mount(&app.backend)
        .await;

    let html = app.get_mails().await.text().await.unwrap();

    let data_email = format!(
        r#"class="copy" data-email="{}">Copy</button>"#,
        htmlescape::encode_attribute("ursula@domain.com")
    );
    assert!(html.contains(&data_email));
    assert!(html.contains("Copied!"));
    assert!(html.contains("navigator.clipboard.writeText(button.dataset.email)"));
    assert!(html.contains(r#"<a class="refresh" href="/mails">Refresh</a>"#));
}

#[tokio::test]
async fn mails_page_tolerates_timestamps_without_offset() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [
                entry("1", "ursula@domain.com", "2025-03-07T18:24:05.123"),
                entry("2", "octavia@domain.com", "2025-03-09T08:00:00Z"),
                entry("3", "ada@domain.com", "sometime"),
            ],
        })))
        .mount(&app.backend)
        .await;

    let response = app.get_mails().await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("3 emails collected"));
    assert!(html.contains("Joined: Mar 7, 2025"));
    assert!(html.contains("Joined: Mar 9, 2025"));
    assert!(html.contains("Joined: sometime"));
}
