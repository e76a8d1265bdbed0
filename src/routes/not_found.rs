use actix_web::{http::header::ContentType, HttpResponse};

use crate::utils::current_year;

/// Fallback for any unregistered path; friend lookups reuse the same
/// page when an id does not exist.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(not_found_html())
}

pub fn not_found_html() -> String {
    let year = current_year();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>404 - Page not found</title>
    </head>
    <body>
        <h1>404</h1>
        <p>That page does not exist. <a href="/">Back home.</a></p>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#
    )
}
