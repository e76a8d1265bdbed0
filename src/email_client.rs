use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::SubscriberEmail;

/// One authenticated relay transaction per `send_email` call. No
/// retries, no queue; a relay rejection is the caller's problem.
#[derive(Debug)]
pub struct EmailClient {
    pub sender: SubscriberEmail,
    pub http_client: Client,
    pub relay_url: String,
    pub authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        relay_url: String,
        sender: SubscriberEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the relay HTTP client.");

        Self {
            http_client,
            relay_url,
            authorization_token,
            sender,
        }
    }

    pub async fn send_email(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/send", self.relay_url);

        let request_body = SendMessageRequest {
            key: self.authorization_token.expose_secret(),
            message: SendMessageDetails {
                to: [SendMessageRecipient {
                    email: recipient.as_ref(),
                }],
                from_email: self.sender.as_ref(),
                from_name: self.sender.as_ref(),
                subject,
                text: text_content,
            },
        };

        self.http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendMessageRecipient<'a> {
    email: &'a str,
}

#[derive(serde::Serialize)]
struct SendMessageDetails<'a> {
    from_email: &'a str,
    from_name: &'a str,
    to: [SendMessageRecipient<'a>; 1],
    subject: &'a str,
    text: &'a str,
}

#[derive(serde::Serialize)]
struct SendMessageRequest<'a> {
    key: &'a str,
    message: SendMessageDetails<'a>,
}
