use std::net::TcpListener;

use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::{ExposeSecret, Secret};
use tracing_actix_web::TracingLogger;

use crate::backend::WaitlistClient;
use crate::routes::health::health_check;
use crate::routes::home::home;
use crate::routes::mails::mails_page;
use crate::routes::waitlist::{join_waitlist, reject_malformed_form};

pub fn run(
    listener: TcpListener,
    waitlist_client: WaitlistClient,
    hmac_secret: Secret<String>,
) -> Result<Server, std::io::Error> {
    let waitlist_client = web::Data::new(waitlist_client);

    let message_store =
        CookieMessageStore::builder(Key::from(hmac_secret.expose_secret().as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/waitlist", web::post().to(join_waitlist))
            .route("/mails", web::get().to(mails_page))
            .route("/health", web::get().to(health_check))
            .app_data(waitlist_client.clone())
            .app_data(web::FormConfig::default().error_handler(reject_malformed_form))
    })
    .listen(listener)?
    .run())
}
