use std::net::TcpListener;

use actix_web::dev::Server;
use secrecy::ExposeSecret;

use crate::backend::WaitlistClient;
use crate::config::Configuration;
use crate::run::run;

pub struct Application {
    port: u16,
    address: String,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        // The flash message cookie key is derived from this secret.
        anyhow::ensure!(
            configuration.application.hmac_secret.expose_secret().len() >= 64,
            "`application.hmac_secret` must be at least 64 bytes long"
        );

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting service on address: {}:{}",
            configuration.application.host,
            port
        );

        let waitlist_client = WaitlistClient::new(&configuration.waitlist_backend)?;

        let server = run(
            listener,
            waitlist_client,
            configuration.application.hmac_secret,
        )?;

        Ok(Self {
            port,
            address: configuration.application.host,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
