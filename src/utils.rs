use actix_web::{http::header::LOCATION, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::{Datelike, Utc};

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

pub fn flash_messages_html(flash_messages: IncomingFlashMessages) -> String {
    flash_messages
        .iter()
        .fold(String::new(), |a, m| a + &format!("<p><i>{}</i></p>", m.content()))
}

/// Every page footer carries the current year, like the original templates.
pub fn current_year() -> i32 {
    Utc::now().year()
}
