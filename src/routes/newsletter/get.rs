use actix_web::{http::header::ContentType, HttpResponse};

use super::signup_page;

pub async fn signup_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(signup_page(""))
}
