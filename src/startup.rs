use std::{net::TcpListener, str::FromStr};

use actix_web::{cookie::Key, dev::Server, web, App, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    email_client::EmailClient,
    routes::{
        about, add_friend, delete_friend, friends_page, health_check, home, legacy_add_friend,
        legacy_friends_page, legacy_signup, legacy_signup_form, not_found, signup, signup_form,
        subscribe_landing, update_friend, update_friend_form,
    },
    subscribers::SubscriberRoster,
};

pub fn run(
    listener: TcpListener,
    pool: SqlitePool,
    email_client: EmailClient,
    hmac_secret: Secret<String>,
    roster: SubscriberRoster,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(pool);
    let email_client = web::Data::new(email_client);
    let roster = web::Data::new(roster);

    let message_store =
        CookieMessageStore::builder(Key::derive_from(hmac_secret.expose_secret().as_bytes()))
            .build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/about", web::get().to(about))
            .route("/subscribe", web::get().to(subscribe_landing))
            .route("/health_check", web::get().to(health_check))
            .route("/form", web::get().to(signup_form))
            .route("/form", web::post().to(signup))
            .route("/old-form", web::get().to(legacy_signup_form))
            .route("/old-form", web::post().to(legacy_signup))
            .route("/friends", web::get().to(friends_page))
            .route("/friends", web::post().to(add_friend))
            .route("/friends_html", web::get().to(legacy_friends_page))
            .route("/friends_html", web::post().to(legacy_add_friend))
            .route("/update_friends/{friend_id}", web::get().to(update_friend_form))
            .route("/update_friends/{friend_id}", web::post().to(update_friend))
            // The original site wired delete to both methods.
            .route("/delete_friends/{friend_id}", web::get().to(delete_friend))
            .route("/delete_friends/{friend_id}", web::post().to(delete_friend))
            .default_service(web::route().to(not_found))
            .app_data(db_pool.clone())
            .app_data(email_client.clone())
            .app_data(roster.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        let pool = get_connection_pool(configuration.database_url.expose_secret())
            .context("Failed to open the friends database.")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to migrate the friends database.")?;

        let sender_email = configuration
            .email_client
            .sender()
            .expect("Invalid sender email address.");

        let timeout = configuration.email_client.timeout();

        let email_client = EmailClient::new(
            configuration.email_client.relay_url,
            sender_email,
            configuration.email_client.authorization_token,
            timeout,
        );

        let listener = TcpListener::bind(&configuration.application.address).with_context(|| {
            format!(
                "Could not bind address {}.",
                &configuration.application.address
            )
        })?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            pool,
            email_client,
            configuration.application.hmac_secret,
            SubscriberRoster::default(),
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    Ok(SqlitePoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(options))
}
