use dotenv::{dotenv, var, Error};
use secrecy::Secret;

use crate::domain::SubscriberEmail;

#[derive(Clone, Debug)]
pub struct EmailClientSettings {
    pub relay_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: u64,
}

#[derive(Clone, Debug)]
pub struct ApplicationSettings {
    pub address: String,
    pub hmac_secret: Secret<String>,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: Secret<String>,
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<SubscriberEmail, String> {
        SubscriberEmail::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, Error> {
    dotenv().ok();

    Ok(Settings {
        database_url: Secret::new(
            var("DATABASE_URL").unwrap_or_else(|_| "sqlite:friends.db".to_string()),
        ),
        application: ApplicationSettings {
            address: format!(
                "{}:{}",
                var("HTTP_INTERFACE").unwrap_or_else(|_| "127.0.0.1".to_string()),
                var("HTTP_PORT").map_or(8000, |v| v
                    .parse::<u16>()
                    .expect("HTTP_PORT cannot be parsed as u16"))
            ),
            // Signs the flash-message cookie; needs at least 32 bytes.
            hmac_secret: Secret::new(var("SECRET_KEY").expect("SECRET_KEY missing")),
        },
        email_client: EmailClientSettings {
            relay_url: var("EMAIL_RELAY_URL").expect("EMAIL_RELAY_URL missing"),
            sender_email: var("EMAIL_ADD").expect("EMAIL_ADD missing"),
            authorization_token: Secret::new(var("EMAIL_PASS").expect("EMAIL_PASS missing")),
            timeout_milliseconds: var("EMAIL_RELAY_TIMEOUT_MILLISECONDS").map_or(5000, |v| {
                v.parse::<u64>()
                    .expect("EMAIL_RELAY_TIMEOUT_MILLISECONDS cannot be parsed as u64")
            }),
        },
    })
}
