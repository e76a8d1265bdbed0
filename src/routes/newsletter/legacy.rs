use actix_web::{http::header::ContentType, web, HttpResponse};
use tracing::instrument;

use crate::{
    domain::SubscriberEmail, email_client::EmailClient, subscribers::SubscriberRoster,
    utils::current_year,
};

use super::{post::SignupError, title_case, WELCOME_MESSAGE};

#[derive(serde::Deserialize)]
pub struct LegacySignupForm {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

pub async fn legacy_signup_form() -> HttpResponse {
    let year = current_year();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>Newsletter signup</title>
    </head>
    <body>
        <form method="post" action="/old-form">
            <input type="text" placeholder="First name" name="first_name" />
            <input type="text" placeholder="Last name" name="last_name" />
            <input type="text" placeholder="Email address" name="email" />

            <button type="submit">Submit</button>
        </form>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#
        ))
}

/// The pre-validation signup endpoint, kept for compatibility. It only
/// checks field presence and stores the email address verbatim, while
/// `/form` lowercases it before adding to the roster.
#[instrument(name = "Legacy newsletter signup", skip_all)]
pub async fn legacy_signup(
    form: web::Form<LegacySignupForm>,
    email_client: web::Data<EmailClient>,
    roster: web::Data<SubscriberRoster>,
) -> Result<HttpResponse, SignupError> {
    let form = form.into_inner();
    let (first_name, last_name, email) = match (
        form.first_name.filter(|v| !v.is_empty()),
        form.last_name.filter(|v| !v.is_empty()),
        form.email.filter(|v| !v.is_empty()),
    ) {
        (Some(first), Some(last), Some(email)) => (first, last, email),
        _ => {
            return Ok(HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(form_fail_page("Form fields required.")));
        }
    };

    // Delivery still needs a parseable address even on this path.
    let recipient = match SubscriberEmail::parse(email.clone()) {
        Ok(recipient) => recipient,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(form_fail_page("A valid email address is required.")));
        }
    };

    let subject = format!("Thank you, {}!", title_case(&first_name));
    email_client
        .send_email(&recipient, &subject, WELCOME_MESSAGE)
        .await?;

    roster.add(format!("{} {} | {}", first_name, last_name, email));

    let year = current_year();
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>Thank you</title>
    </head>
    <body>
        <p>Thank you for subscribing, {first_name}!</p>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#
        )))
}

fn form_fail_page(error_statement: &str) -> String {
    let year = current_year();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>Submission failed</title>
    </head>
    <body>
        <p><i>{error_statement}</i></p>
        <p><a href="/old-form">Try again.</a></p>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#
    )
}
