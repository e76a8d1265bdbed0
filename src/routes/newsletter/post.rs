use actix_web::{http::header::ContentType, http::StatusCode, web, HttpResponse, ResponseError};
use tracing::instrument;

use crate::{
    domain::{NewSubscriber, SubscriberEmail, SubscriberName},
    email_client::EmailClient,
    routes::error_chain_fmt,
    subscribers::SubscriberRoster,
};

use super::{signup_page, title_case, WELCOME_MESSAGE};

#[derive(serde::Deserialize)]
pub struct SignupForm {
    first_name: String,
    last_name: String,
    email: String,
}

impl TryFrom<SignupForm> for NewSubscriber {
    type Error = String;

    fn try_from(form: SignupForm) -> Result<Self, Self::Error> {
        let first_name = SubscriberName::parse(form.first_name)?;
        let last_name = SubscriberName::parse(form.last_name)?;
        let email = SubscriberEmail::parse(form.email)?;

        Ok(NewSubscriber {
            first_name,
            last_name,
            email,
        })
    }
}

#[derive(thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    Validation(String),
    // Error text of the original site's catch-all.
    #[error("Form Submit Error.")]
    Notify(#[from] reqwest::Error),
}

impl std::fmt::Debug for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupError::Validation(_) => StatusCode::BAD_REQUEST,
            SignupError::Notify(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Rejected input re-renders the form, prior values cleared.
            SignupError::Validation(e) => HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(signup_page(&format!("<p><i>{}</i></p>", e))),
            SignupError::Notify(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

#[instrument(
    name = "Newsletter signup",
    skip(form, email_client, roster),
    fields(subscriber_email = %form.email)
)]
pub async fn signup(
    form: web::Form<SignupForm>,
    email_client: web::Data<EmailClient>,
    roster: web::Data<SubscriberRoster>,
) -> Result<HttpResponse, SignupError> {
    let new_subscriber: NewSubscriber = form
        .into_inner()
        .try_into()
        .map_err(SignupError::Validation)?;

    // The original recorded the subscriber before attempting delivery,
    // so a relay failure still leaves the entry in the roster.
    roster.add(new_subscriber.roster_entry());

    let subject = format!("Thank you, {}!", title_case(new_subscriber.first_name.as_ref()));
    email_client
        .send_email(&new_subscriber.email, &subject, WELCOME_MESSAGE)
        .await?;

    let notice = format!(
        "<p>Thank you for subscribing, {}!</p>",
        new_subscriber.first_name.as_ref()
    );
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(signup_page(&notice)))
}
